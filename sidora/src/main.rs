#![windows_subsystem = "windows"]

use std::{error::Error, io::Write};

use iced::{Settings, Size, Subscription, Task};
use tracing::error;

use sidora::{
    args::{datadir, parse_args},
    config::{Config, ConfigError},
    dir::SidoraDirectory,
    logger::{parse_log_level, setup_logger},
    state::{Msg, State},
    VERSION,
};
use sidora_ui::{component::text, font, theme::Theme, widget::Element};

pub struct Sidora {
    state: State,
}

impl Sidora {
    pub fn new(config: Config) -> (Self, Task<Msg>) {
        (
            Self {
                state: State::new(config),
            },
            iced::widget::text_input::focus(iced::widget::text_input::Id::new("login_email")),
        )
    }

    pub fn title(&self) -> String {
        format!("siDORA - {}", self.state.route().path())
    }

    pub fn update(&mut self, message: Msg) -> Task<Msg> {
        self.state.update(message)
    }

    pub fn view(&self) -> Element<'_, Msg> {
        self.state.view()
    }

    pub fn subscription(&self) -> Subscription<Msg> {
        self.state.subscription()
    }
}

fn load_config(datadir: &SidoraDirectory) -> Result<Config, ConfigError> {
    let path = datadir.config_path();
    match Config::from_file(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound) => {
            let config = Config::default();
            // Not fatal, the defaults are used either way.
            if let Err(e) = config.to_file(&path) {
                eprintln!("Failed to write default configuration: {}", e);
            }
            Ok(config)
        }
        Err(e) => Err(e),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect(), VERSION)?;
    let datadir = datadir(&args)?;
    datadir.init()?;

    let config = load_config(&datadir)?;
    let log_level = match parse_log_level()? {
        Some(level) => level,
        None => config.log_level()?,
    };
    setup_logger(log_level, &datadir.log_path())?;
    setup_panic_hook();

    tracing::info!(
        "starting siDORA {} with datadir {}",
        VERSION,
        datadir.path().display()
    );

    let settings = Settings {
        id: Some("siDORA".to_string()),
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: Size::new(900.0, 700.0),
        min_size: Some(Size::new(480.0, 600.0)),
        ..Default::default()
    };

    if let Err(e) = iced::application(Sidora::title, Sidora::update, Sidora::view)
        .theme(|_| Theme::default())
        .subscription(Sidora::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || Sidora::new(config))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_is_written_with_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let datadir = SidoraDirectory::new(tmp.path().to_path_buf());
        assert_eq!(load_config(&datadir).unwrap(), Config::default());
        assert!(datadir.config_path().exists());
        assert_eq!(load_config(&datadir).unwrap(), Config::default());
    }

    #[test]
    fn invalid_config_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let datadir = SidoraDirectory::new(tmp.path().to_path_buf());
        std::fs::write(datadir.config_path(), "log_level = \"verbose\"").unwrap();
        assert!(matches!(
            load_config(&datadir),
            Err(ConfigError::InvalidField("log_level", _))
        ));
    }
}

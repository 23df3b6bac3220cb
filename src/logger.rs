use log::LevelFilter;

/// Initialize `env_logger`, `RUST_LOG` overrides the default `info` filter.
pub fn init() {
  env_logger::builder()
    .filter_level(LevelFilter::Info)
    .parse_default_env()
    .init();
}

/// Log the error of a failing result at the call site and hand the result back.
pub trait LogExt {
  fn log_warn(self, msg: &str) -> Self;
  fn log_error(self, msg: &str) -> Self;
}

impl<T, E> LogExt for Result<T, E> where E: std::fmt::Display {
  #[track_caller]
  fn log_warn(self, msg: &str) -> Self {
    if let Err(error) = &self {
      let location = std::panic::Location::caller().to_string();

      log::warn!(location; "{msg}: {error}");
    }

    self
  }

  #[track_caller]
  fn log_error(self, msg: &str) -> Self {
    if let Err(error) = &self {
      let location = std::panic::Location::caller().to_string();

      log::error!(location; "{msg}: {error}");
    }

    self
  }
}

use env_logger::Builder;
use log::{debug, LevelFilter};
use std::sync::Once;

static INIT: Once = Once::new();

/// `RUST_LOG` takes precedence over `level`.
pub fn initialize_logger(level: LevelFilter) {
  INIT.call_once_force(|_| {
    let mut builder = Builder::new();

    builder
      .filter_level(level)
      .format_timestamp_millis()
      .parse_default_env();

    if let Err(e) = builder.try_init() {
      debug!("keeping the existing logger: {}", e);
    }
  });
}

#[cfg(test)]
mod tests {
  use super::initialize_logger;
  use log::{debug, LevelFilter};

  #[test]
  fn initializes_twice() {
    initialize_logger(LevelFilter::Debug);
    initialize_logger(LevelFilter::Off);
    debug!("logger initialized");
  }
}

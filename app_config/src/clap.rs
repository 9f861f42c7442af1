use clap::{Arg, Command};
use lazy_static::lazy_static;

lazy_static! {
  pub static ref CLAP_ARGS: ClapArgs = ClapArgs::new();
}

pub struct ClapArgs {
  args: clap::ArgMatches,
}

impl ClapArgs {
  const PORT: &'static str = "port";

  pub fn new() -> Self {
    let args = Self::setup_args();

    Self { args }
  }

  /// Overrides the configured listening port when passed.
  pub fn port(&self) -> Option<u16> {
    let value = self.args.get_one::<String>(Self::PORT)?;

    value.parse::<u16>().ok()
  }

  fn setup_args() -> clap::ArgMatches {
    Command::new("Emoji Maker Backend")
      .arg(
        Arg::new(Self::PORT)
          .short('p')
          .long("port")
          .action(clap::ArgAction::Set)
          .help("Overrides the port the HTTP interface listens on."),
      )
      .get_matches()
  }
}

impl Default for ClapArgs {
  fn default() -> Self {
    Self::new()
  }
}

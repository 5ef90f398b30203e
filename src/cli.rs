use clap::Parser;
use std::{ffi::OsString, path::PathBuf, time::Duration};

use crate::domain::common::Theme;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Wireless interface to scan and restart
    #[arg(short = 'i', long = "interface", default_value = "wlan0")]
    iface: String,

    /// Path to wpa_supplicant.conf
    #[arg(short = 'f', long = "file", default_value = "/etc/wpa_supplicant.conf")]
    config_file: PathBuf,

    /// Restart the network interface if the config file has changed
    #[arg(short = 'r', long)]
    restart: bool,

    /// Use the light color scheme
    #[arg(short = 'l', long)]
    light: bool,

    /// Seconds to wait for the scan and restart commands
    #[arg(long, default_value_t = 15)]
    command_timeout: u64,

    /// Write logs to this file (WPANET_LOG_LEVEL sets the filter)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    pub iface: String,
    pub config_file: PathBuf,
    pub restart: bool,
    pub theme: Theme,
    pub command_timeout: Duration,
    pub log_file: Option<PathBuf>,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            iface: args.iface,
            config_file: args.config_file,
            restart: args.restart,
            theme: if args.light { Theme::Light } else { Theme::Dark },
            command_timeout: Duration::from_secs(args.command_timeout),
            log_file: args.log_file,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["wpanet"]);
        assert_eq!(args.iface, "wlan0");
        assert_eq!(args.config_file, PathBuf::from("/etc/wpa_supplicant.conf"));
        assert!(!args.restart);
        assert_eq!(args.theme, Theme::Dark);
        assert_eq!(args.command_timeout, Duration::from_secs(15));
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["wpanet", "-i", "wlan1", "-f", "/tmp/w.conf", "-r", "-l"]);
        assert_eq!(args.iface, "wlan1");
        assert_eq!(args.config_file, PathBuf::from("/tmp/w.conf"));
        assert!(args.restart);
        assert_eq!(args.theme, Theme::Light);
    }

    #[test]
    fn test_parse_args_long_flags() {
        let args = CommandLineArgs::parse_from([
            "wpanet",
            "--interface",
            "iwm0",
            "--command-timeout",
            "3",
            "--log-file",
            "/tmp/wpanet.log",
        ]);
        assert_eq!(args.iface, "iwm0");
        assert_eq!(args.command_timeout, Duration::from_secs(3));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/wpanet.log")));
    }
}

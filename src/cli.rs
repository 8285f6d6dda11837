// パス: src/cli.rs
// 役割: Command-line flag parsing
// 意図: Turn process arguments into connection, rendering, and logging settings
// 関連ファイル: src/bin/rediscli.rs, src/connection.rs, src/repl/printer.rs
//! コマンドライン引数の定義。`-h` はホスト指定に使うためヘルプは `--help` のみ。

use std::ffi::OsString;

use clap::{ArgAction, Parser};

use crate::connection::ConnectOptions;
use crate::repl::RenderOptions;

#[derive(Parser, Debug)]
#[command(name = "rediscli", version, about, long_about = None)]
#[command(disable_help_flag = true)]
struct ClapArgs {
    /// サーバー URI。指定時は他の接続設定より優先される。
    #[arg(short = 'u', long = "uri", help = "Server URI.")]
    uri: Option<String>,

    #[arg(
        short = 'h',
        long = "host",
        default_value = "127.0.0.1",
        help = "Server hostname."
    )]
    host: String,

    #[arg(short = 'p', long = "port", default_value_t = 6379, help = "Server port.")]
    port: u16,

    #[arg(short = 'n', long = "db", default_value_t = 0, help = "Database number.")]
    db: i64,

    #[arg(
        short = 'a',
        long = "auth",
        help = "Password to use when connecting to the server."
    )]
    auth: Option<String>,

    #[arg(long = "tls", help = "Connect over SSL/TLS.")]
    tls: bool,

    #[arg(long = "quote-bulk", help = "Print bulk string replies as quoted literals.")]
    quote_bulk: bool,

    #[arg(short = 'v', action = ArgAction::Count, help = "Increase log verbosity.")]
    verbose: u8,

    #[arg(long = "help", action = ArgAction::Help, help = "Print help.")]
    help: Option<bool>,

    /// 指定があればその場で 1 回だけ実行する。空なら REPL。
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 1..)]
    command: Vec<String>,
}

/// 解析済みのコマンドライン設定。
#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    connect: ConnectOptions,
    render: RenderOptions,
    verbose: u8,
    command: Vec<String>,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::try_parse_from(itr).map(Self::from_clap)
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            connect: ConnectOptions {
                host: args.host,
                port: args.port,
                database: args.db,
                password: args.auth.filter(|s| !s.is_empty()),
                secure: args.tls,
                uri: args.uri.filter(|s| !s.is_empty()),
            },
            render: RenderOptions {
                quote_bulk: args.quote_bulk,
            },
            verbose: args.verbose,
            command: args.command,
        }
    }

    pub fn connect_options(&self) -> &ConnectOptions {
        &self.connect
    }

    pub fn render_options(&self) -> RenderOptions {
        self.render
    }

    /// 位置引数のコマンド。空なら REPL モード。
    pub fn command(&self) -> &[String] {
        &self.command
    }

    pub fn is_interactive(&self) -> bool {
        self.command.is_empty()
    }

    /// `-v` の回数から既定のログレベルを決める。
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

//! 命令实现，每个模块对应一组界面。

mod dashboard;
mod objects;
mod organizations;
mod permits;
mod session;
mod users;

use crate::cli::Commands;
use crate::console::Console;
use crate::error::ConsoleError;
use std::io::Write;

pub async fn run(
    command: Commands,
    console: &mut Console,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    match command {
        Commands::Login(args) => session::login(console, args, out).await,
        Commands::Logout => session::logout(console, out),
        Commands::Whoami => session::whoami(console, out),
        Commands::Dashboard => dashboard::dashboard(console, out).await,
        Commands::Stats => dashboard::stats(console, out).await,
        Commands::Permits(command) => permits::run(command, console, out).await,
        Commands::Users(command) => users::run(command, console, out).await,
        Commands::Organizations(command) => organizations::run(command, console, out).await,
        Commands::Objects(command) => objects::run(command, console, out).await,
    }
}

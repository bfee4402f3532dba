use log::info;
use std::env;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use recipe_finder::command::HELP;
use recipe_finder::{App, Command, FinderConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = FinderConfig::load()?;
    let mut app = App::from_config(&config)?;

    // With arguments: one search, print the listing and exit
    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        let frame = app.apply(Command::Search(args.join(" "))).await?;
        println!("{}", frame);
        return Ok(());
    }

    println!("{}", app.render().await);
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            command => match app.apply(command).await {
                Ok(frame) => println!("{}", frame),
                Err(e) => println!("{}", e),
            },
        }
    }

    info!("Session ended");
    Ok(())
}

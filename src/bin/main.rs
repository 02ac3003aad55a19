use crossterm::style::Stylize;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use wordlie::bot::{self, Reply};
use wordlie::core::types::UserId;
use wordlie::startup::boot;

const CONSOLE_USER: UserId = 0;

fn main() {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let game = match boot(config_path.as_deref()) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{} {}", "[FATAL]".red().bold(), e);
            std::process::exit(1);
        }
    };

    println!("Wordlie word-chain game. Type /help for the rules, 'exit' to quit.");
    println!("---------------------------------------------------------------");

    loop {
        print!("\n> ");
        if stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match stdin().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let cmd = input.trim();
        match cmd {
            "exit" => break,
            "" => continue,
            _ => print_reply(&bot::handle(&game, CONSOLE_USER, cmd)),
        }
    }
}

fn print_reply(reply: &Reply) {
    if reply.offer_dont_know {
        println!("{}", reply.text.as_str().green().bold());
        println!("{}", "(type /idk if you don't know this word)".dark_grey());
    } else {
        println!("{}", reply.text.as_str().yellow());
    }
}

use std::io::stdin;

use kings_escape::{Game, GameStatus, Play, Player, Side};
use log::info;

fn input(prompt: &str) -> std::io::Result<String> {
    println!("{prompt}");
    let mut s: String = String::new();
    if stdin().read_line(&mut s)? == 0 {
        return Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(s.trim().to_string())
}

fn get_play(player: &Player) -> std::io::Result<Play> {
    loop {
        let m_str = input("Please enter your move (eg \"A4 to E4\"):")?;
        match Play::parse(&m_str, player.clone()) {
            Ok(play) => return Ok(play),
            Err(e) => println!("Could not parse move ({e}). Try again."),
        }
    }
}

fn main() {
    env_logger::init();
    println!("King's Escape");
    let mut game = match Game::new(Player::new("Player 1"), Player::new("Player 2")) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Could not create game: {e}");
            return;
        }
    };
    let mut side = Side::Attacker;
    while !game.is_over() {
        println!("{}", game.board());
        let player = game.player(side).clone();
        println!("It is {player}'s turn to play ({side}).");
        let play = match get_play(&player) {
            Ok(play) => play,
            Err(e) => {
                eprintln!("Error reading input ({e}). Exiting.");
                return;
            }
        };
        match game.execute(&play) {
            Ok(outcome) => {
                for t in outcome.captures {
                    println!("Captured the piece on {t}.");
                }
                side = side.other();
            }
            Err(e) => println!("Move not legal: {e}. Try again."),
        }
    }
    println!("{}", game.board());
    match game.status() {
        GameStatus::DefenderWon => println!("Game over. The king has escaped."),
        GameStatus::AttackerWon => println!("Game over. The king is surrounded."),
        other => println!("Game over ({other:?})."),
    }
    info!("final status: {:?}", game.status());
}

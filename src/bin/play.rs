//! Interactive two-seat driver: reads `D2->D4` style moves from stdin and
//! feeds them to the game, round by round. Holds no game state of its own.

use std::io::{self, BufRead, Write};

use chess_rules::board::prelude::*;

fn render(game: &Game) -> String {
    let mut out = String::new();
    for rank in (0..BOARD_SIZE).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');
        for square in game.board().rank_squares(rank).into_iter().flatten() {
            match square.piece().map(|id| game.board().piece(id)) {
                Some(piece) => out.push_str(&piece.to_string()),
                None => out.push_str(".."),
            }
            out.push(' ');
        }
        out.push('\n');
    }
    out.push_str("  A  B  C  D  E  F  G  H\n");
    out
}

fn prompt(input: &mut impl BufRead, name: &str) -> io::Result<Option<(String, String)>> {
    print!("{name}: Enter your move. Ex: D2->D4\n> ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    match line.trim().split_once("->") {
        Some((from, to)) => Ok(Some((from.trim().to_string(), to.trim().to_string()))),
        None => Ok(Some((line.trim().to_string(), String::new()))),
    }
}

fn main() -> io::Result<()> {
    let mut game = Game::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    while !game.is_over() {
        println!("Round {}: {}", game.round(), game.status());
        println!("{}", render(&game));

        let Some((w_from, w_to)) = prompt(&mut input, game.white().name())? else {
            break;
        };
        let Some((b_from, b_to)) = prompt(&mut input, game.black().name())? else {
            break;
        };

        if let Err(err) = game.play_round(
            w_from.as_str(),
            w_to.as_str(),
            b_from.as_str(),
            b_to.as_str(),
        ) {
            eprintln!("Error: {err}\n");
        }
    }

    println!("{}", render(&game));
    match game.winner() {
        Some(winner) => println!("{}: {} wins!", game.status(), winner.name()),
        None => println!("{}", game.status()),
    }
    Ok(())
}

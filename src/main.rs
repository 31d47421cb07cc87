use std::io::{self, BufRead, Write};

use anyhow;

use library_catalog::api::LibraryClient;
use library_catalog::config;
use library_catalog::models::AvailabilityStatus;
use library_catalog::view::{render_book_list, render_validation_error, CatalogView};

/// Terminal stand-in for the single catalog page: one state container,
/// one command loop, rendering after every operation.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let api = LibraryClient::new(config::api_url())?;
    let mut view = CatalogView::new();

    view.load_all(&api).await;
    print!("{}", render_book_list(&view));

    let stdin = io::stdin();

    loop {
        prompt("> ")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("list") => {
                view.load_all(&api).await;
                print!("{}", render_book_list(&view));
            }
            Some("add") => {
                view.draft.id = read_field(&stdin, "id (blank for server-assigned): ", true)?;
                view.draft.title = read_field(&stdin, "title: ", false)?;
                view.draft.author = read_field(&stdin, "author: ", false)?;
                view.draft.genre = read_field(&stdin, "genre: ", false)?;
                view.draft.availability_status = read_status(&stdin)?;

                view.add_book(&api).await;

                match render_validation_error(&view) {
                    Some(message) => println!("{}", message),
                    None => print!("{}", render_book_list(&view)),
                }
            }
            Some("search") => {
                view.id_query = read_field(&stdin, "id query (blank to skip): ", true)?;
                view.title_query = read_field(&stdin, "title query (blank to skip): ", true)?;

                view.search(&api).await;
                print!("{}", render_book_list(&view));
            }
            Some("delete") => match parts.next().and_then(|raw| raw.parse::<i64>().ok()) {
                Some(id) => {
                    view.delete_book(&api, id).await;
                    print!("{}", render_book_list(&view));
                }
                None => println!("usage: delete <id>"),
            },
            Some("quit") | Some("exit") => break,
            Some(other) => println!(
                "unknown command: {} (try list, add, search, delete <id>, quit)",
                other
            ),
            None => {}
        }
    }

    Ok(())
}

fn prompt(text: &str) -> anyhow::Result<()> {
    print!("{}", text);
    io::stdout().flush()?;

    Ok(())
}

/// Read one form field. Required fields re-prompt until non-empty, the
/// same constraint the original form put on title/author/genre.
fn read_field(stdin: &io::Stdin, label: &str, allow_empty: bool) -> anyhow::Result<String> {
    loop {
        prompt(label)?;

        let mut value = String::new();
        stdin.lock().read_line(&mut value)?;
        let value = value.trim().to_string();

        if allow_empty || !value.is_empty() {
            return Ok(value);
        }
    }
}

fn read_status(stdin: &io::Stdin) -> anyhow::Result<AvailabilityStatus> {
    loop {
        let value = read_field(
            stdin,
            "status [Available | Checked Out] (blank = Available): ",
            true,
        )?;

        if value.is_empty() {
            return Ok(AvailabilityStatus::default());
        }

        match value.parse::<AvailabilityStatus>() {
            Ok(status) => return Ok(status),
            Err(_) => println!("expected 'Available' or 'Checked Out'"),
        }
    }
}

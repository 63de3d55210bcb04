//! Interactive dashboard loop.
//!
//! Two mutually exclusive views share one command prompt: the list view
//! fetches every record each time it is rendered and offers update/delete on
//! numbered entries, the add view submits new records through a two-field
//! form. `mode view` and `mode add` switch between them.

use std::io;
use std::sync::Arc;

use clap::ValueEnum;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::warn;

use crate::{
    client::UsersApi,
    models::{UserForm, UserRow},
    view,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// List, edit and delete users
    View,
    /// Add a new user
    Add,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Switch(Mode),
    Reload,
    New,
    Update(usize),
    Delete(usize),
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let command = match (words.next(), words.next()) {
            (None, _) => return Command::Help,
            (Some("quit" | "q" | "exit"), None) => Command::Quit,
            (Some("help" | "?"), None) => Command::Help,
            (Some("reload"), None) => Command::Reload,
            (Some("new"), None) => Command::New,
            (Some("mode"), Some("view")) | (Some("view"), None) => Command::Switch(Mode::View),
            (Some("mode"), Some("add")) | (Some("add"), None) => Command::Switch(Mode::Add),
            (Some("update"), Some(n)) => match n.parse() {
                Ok(n) => Command::Update(n),
                Err(_) => Command::Unknown(line.trim().to_string()),
            },
            (Some("delete"), Some(n)) => match n.parse() {
                Ok(n) => Command::Delete(n),
                Err(_) => Command::Unknown(line.trim().to_string()),
            },
            _ => Command::Unknown(line.trim().to_string()),
        };

        if words.next().is_some() {
            Command::Unknown(line.trim().to_string())
        } else {
            command
        }
    }
}

pub struct Dashboard {
    api: Arc<dyn UsersApi>,
    mode: Mode,
    // rows shown by the last list render; `update <n>`/`delete <n>` index into them
    rows: Vec<UserRow>,
}

impl Dashboard {
    pub fn new(api: Arc<dyn UsersApi>, mode: Mode) -> Self {
        Self {
            api,
            mode,
            rows: Vec::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Runs until `quit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let mut needs_render = true;

        loop {
            if needs_render {
                self.render(&mut output).await?;
                needs_render = false;
            }

            output.write_all(view::prompt(self.mode).as_bytes()).await?;
            output.flush().await?;
            let Some(line) = lines.next_line().await? else {
                break;
            };

            match (Command::parse(&line), self.mode) {
                (Command::Quit, _) => break,
                (Command::Help, mode) => output.write_all(view::help(mode).as_bytes()).await?,
                (Command::Switch(mode), _) => {
                    self.mode = mode;
                    needs_render = true;
                }
                (Command::Reload, Mode::View) => needs_render = true,
                (Command::Update(n), Mode::View) => {
                    let Some(row) = self.row(n) else {
                        write_line(&mut output, &format!("no user numbered {n}")).await?;
                        continue;
                    };
                    let Some(form) = read_form(&mut lines, &mut output, Some(&row)).await? else {
                        break;
                    };
                    let outcome = match self.api.update_user(&row.id, &form).await {
                        Ok(()) => view::UPDATE_SUCCESS,
                        Err(err) => {
                            warn!(error = %err, user_id = %row.id, "update failed");
                            view::UPDATE_FAILURE
                        }
                    };
                    write_line(&mut output, outcome).await?;
                    needs_render = true;
                }
                (Command::Delete(n), Mode::View) => {
                    let Some(row) = self.row(n) else {
                        write_line(&mut output, &format!("no user numbered {n}")).await?;
                        continue;
                    };
                    let outcome = match self.api.delete_user(&row.id).await {
                        Ok(()) => view::DELETE_SUCCESS,
                        Err(err) => {
                            warn!(error = %err, user_id = %row.id, "delete failed");
                            view::DELETE_FAILURE
                        }
                    };
                    write_line(&mut output, outcome).await?;
                    needs_render = true;
                }
                (Command::New, Mode::Add) => {
                    let Some(form) = read_form(&mut lines, &mut output, None).await? else {
                        break;
                    };
                    let outcome = match self.api.add_user(&form).await {
                        Ok(()) => view::ADD_SUCCESS,
                        Err(err) => {
                            warn!(error = %err, "add failed");
                            view::ADD_FAILURE
                        }
                    };
                    write_line(&mut output, outcome).await?;
                }
                (Command::Unknown(text), mode) => {
                    write_line(&mut output, &format!("unknown command: {text}")).await?;
                    output.write_all(view::help(mode).as_bytes()).await?;
                }
                (_, mode) => output.write_all(view::help(mode).as_bytes()).await?,
            }
        }

        output.flush().await
    }

    async fn render<W: AsyncWrite + Unpin>(&mut self, output: &mut W) -> io::Result<()> {
        let rendered = match self.mode {
            Mode::View => {
                self.rows = match self.api.list_users().await {
                    Ok(rows) => rows,
                    Err(err) => {
                        warn!(error = %err, "failed to fetch users");
                        Vec::new()
                    }
                };
                view::render_user_list(&self.rows)
            }
            Mode::Add => view::render_add_view(),
        };
        output.write_all(rendered.as_bytes()).await
    }

    fn row(&self, number: usize) -> Option<UserRow> {
        number
            .checked_sub(1)
            .and_then(|index| self.rows.get(index))
            .cloned()
    }
}

/// Prompts for name and email. With `current`, an empty answer keeps the
/// existing value. `None` means input ended mid-form.
async fn read_form<R, W>(
    lines: &mut Lines<R>,
    output: &mut W,
    current: Option<&UserRow>,
) -> io::Result<Option<UserForm>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(name) = read_field(lines, output, "Name", current.map(|row| row.name.as_str())).await?
    else {
        return Ok(None);
    };
    let Some(email) =
        read_field(lines, output, "Email", current.map(|row| row.email.as_str())).await?
    else {
        return Ok(None);
    };
    Ok(Some(UserForm { name, email }))
}

async fn read_field<R, W>(
    lines: &mut Lines<R>,
    output: &mut W,
    label: &str,
    current: Option<&str>,
) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let prompt = match current {
        Some(value) => format!("{label} [{value}]: "),
        None => format!("{label}: "),
    };
    output.write_all(prompt.as_bytes()).await?;
    output.flush().await?;

    let Some(line) = lines.next_line().await? else {
        return Ok(None);
    };
    let value = line.trim();
    Ok(Some(match current {
        Some(existing) if value.is_empty() => existing.to_string(),
        _ => value.to_string(),
    }))
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("  mode add "), Command::Switch(Mode::Add));
        assert_eq!(Command::parse("view"), Command::Switch(Mode::View));
        assert_eq!(Command::parse("update 2"), Command::Update(2));
        assert_eq!(Command::parse("delete 10"), Command::Delete(10));
        assert_eq!(Command::parse(""), Command::Help);
        assert_eq!(
            Command::parse("delete two"),
            Command::Unknown("delete two".to_string())
        );
        assert_eq!(
            Command::parse("update 1 2"),
            Command::Unknown("update 1 2".to_string())
        );
    }
}

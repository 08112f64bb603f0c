use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::PostId;

pub const HELP_TEXT: &str = "\
list                   show the filtered post list
search [TEXT]          filter by title/content text (empty clears)
category NAME on|off   toggle a category filter
categories             show category filters
clear                  reset search and category filters
edit ID                open the form for a post
delete ID              delete a post after confirmation
new                    open a blank form
title TEXT             set the form title
content TEXT           set the form content
set-category NAME      set the form category
image PATH             attach an image file
no-image               drop the attached image
show                   show the form
submit                 save the form
cancel                 discard the form and return to the list
help                   show this help
quit                   leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Search(String),
    Category { name: String, selected: bool },
    Categories,
    Clear,
    Edit(PostId),
    Delete(PostId),
    New,
    Title(String),
    Content(String),
    SetCategory(String),
    Image(PathBuf),
    NoImage,
    Show,
    Submit,
    Cancel,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`; type `help` for a list")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("`{0}` is not a post id")]
    InvalidId(String),
}

impl ShellCommand {
    /// Parse one input line. The argument of text commands is taken verbatim
    /// after the single separating space, so `search  x` searches for ` x`.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim_start();
        if line.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        let (word, rest) = match line.split_once(' ') {
            Some((word, rest)) => (word, rest),
            None => (line.trim_end(), ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Self::List),
            "search" => Ok(Self::Search(rest.to_string())),
            "category" => parse_category(rest),
            "categories" => Ok(Self::Categories),
            "clear" => Ok(Self::Clear),
            "edit" => parse_id(rest, "edit ID").map(Self::Edit),
            "delete" | "rm" => parse_id(rest, "delete ID").map(Self::Delete),
            "new" => Ok(Self::New),
            "title" => Ok(Self::Title(rest.to_string())),
            "content" => Ok(Self::Content(rest.to_string())),
            "set-category" => required(rest, "set-category NAME").map(Self::SetCategory),
            "image" => required(rest, "image PATH").map(|path| Self::Image(PathBuf::from(path))),
            "no-image" => Ok(Self::NoImage),
            "show" => Ok(Self::Show),
            "submit" | "save" => Ok(Self::Submit),
            "cancel" => Ok(Self::Cancel),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(ParseError::Unknown(word.to_string())),
        }
    }
}

fn required(rest: &str, usage: &'static str) -> Result<String, ParseError> {
    let value = rest.trim();
    if value.is_empty() {
        return Err(ParseError::Usage(usage));
    }
    Ok(value.to_string())
}

fn parse_id(rest: &str, usage: &'static str) -> Result<PostId, ParseError> {
    let raw = required(rest, usage)?;
    raw.parse::<PostId>().map_err(|_| ParseError::InvalidId(raw))
}

fn parse_category(rest: &str) -> Result<ShellCommand, ParseError> {
    const USAGE: &str = "category NAME on|off";
    let (name, toggle) = rest.trim().rsplit_once(' ').ok_or(ParseError::Usage(USAGE))?;
    let selected = match toggle.to_ascii_lowercase().as_str() {
        "on" => true,
        "off" => false,
        _ => return Err(ParseError::Usage(USAGE)),
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::Usage(USAGE));
    }
    Ok(ShellCommand::Category {
        name: name.to_string(),
        selected,
    })
}

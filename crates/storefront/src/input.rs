//! Shell command parsing.
//!
//! Maps one line of shopper input to a [`Command`]. Words are
//! case-insensitive; product ids are passed through as typed.

use pocket_shop_core::{IdError, ProductId};
use thiserror::Error;

use crate::navigation::Screen;
use crate::session::Action;

/// Help text listing every command.
pub const HELP: &str = "\
Navigation:
  home | shop        Product list
  cart               Your cart
  checkout           Order summary
  back               Previous screen
Product list:
  add <id>           Choose a quantity of a product
  more | +           Raise the chosen quantity
  less | -           Lower the chosen quantity
Cart:
  inc <id>           One more of a line
  dec <id>           One fewer of a line (asks before removing the last one)
Checkout:
  pay                Place the order
Dialogs:
  yes | confirm      Accept
  no | cancel        Decline
Other:
  help | ?           Show this help
  quit | exit        Leave the shop";

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(Action),
    Help,
    Quit,
}

/// Errors parsing a command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a command (try 'help')")]
    Empty,
    #[error("Unknown command '{0}' (try 'help')")]
    UnknownCommand(String),
    #[error("'{0}' needs a product id")]
    MissingProductId(&'static str),
    #[error("'{0}' does not take arguments")]
    UnexpectedArgument(String),
    #[error("Invalid product id: {0}")]
    InvalidProductId(#[from] IdError),
}

impl std::str::FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse(line)
    }
}

/// Parse one line of input.
///
/// # Errors
///
/// Returns an [`InputError`] describing why the line is not a command.
pub fn parse(line: &str) -> Result<Command, InputError> {
    let mut words = line.split_whitespace();
    let verb = words.next().ok_or(InputError::Empty)?.to_ascii_lowercase();
    let argument = words.next();

    if words.next().is_some() {
        return Err(InputError::UnexpectedArgument(verb));
    }

    let with_id = |name: &'static str, build: fn(ProductId) -> Action| {
        let raw = argument.ok_or(InputError::MissingProductId(name))?;
        Ok(Command::Action(build(ProductId::parse(raw)?)))
    };

    let command = match verb.as_str() {
        "add" => return with_id("add", Action::OpenPicker),
        "inc" => return with_id("inc", Action::Increment),
        "dec" => return with_id("dec", Action::Decrement),
        "home" | "shop" => Command::Action(Action::Navigate(Screen::Home)),
        "cart" => Command::Action(Action::Navigate(Screen::Cart)),
        "checkout" => Command::Action(Action::Navigate(Screen::Checkout)),
        "back" => Command::Action(Action::Back),
        "more" | "+" => Command::Action(Action::PickerIncrement),
        "less" | "-" => Command::Action(Action::PickerDecrement),
        "pay" => Command::Action(Action::Checkout),
        "yes" | "y" | "confirm" => Command::Action(Action::Confirm),
        "no" | "n" | "cancel" => Command::Action(Action::Cancel),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(InputError::UnknownCommand(verb)),
    };

    if argument.is_some() {
        return Err(InputError::UnexpectedArgument(verb));
    }

    Ok(command)
}

//! Interactive session: browse the menu, fill the cart, check out.
//!
//! Reads one command per line until `quit` or end of input:
//!
//! ```text
//! menu            show the menu
//! show <n>        show menu item n
//! add <n>         add menu item n to the cart
//! remove <n>      remove cart item n
//! cart            show the cart and its total
//! checkout        place an order from the cart
//! orders          show past orders
//! help            list commands
//! quit            end the session
//! ```

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::str::FromStr;

use food_order_core::{CartEvent, CartSnapshot, CartStore, Catalog};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::views::{CartView, DetailView, MenuView, OrdersView};

const HELP: &str = "\
Commands:
  menu            show the menu
  show <n>        show menu item n
  add <n>         add menu item n to the cart
  remove <n>      remove cart item n
  cart            show the cart and its total
  checkout        place an order from the cart
  orders          show past orders
  help            list commands
  quit            end the session
";

/// A parsed session command. Positions are 1-indexed as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Menu,
    Show(usize),
    Add(usize),
    Remove(usize),
    Cart,
    Checkout,
    Orders,
    Help,
    Quit,
}

/// Errors from parsing or executing a session command.
///
/// None of these end the session; they are reported and the next line is
/// read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `help` for a list)")]
    Unknown(String),

    #[error("`{0}` expects a position, e.g. `{0} 1`")]
    MissingPosition(&'static str),

    #[error("invalid position `{0}`, positions start at 1")]
    InvalidPosition(String),

    #[error("no menu item at position {0}")]
    NoSuchMenuItem(usize),

    #[error("no cart item at position {0}")]
    NoSuchCartItem(usize),
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_ascii_lowercase();
        let position = |command: &'static str, arg: Option<&str>| -> Result<usize, CommandError> {
            let arg = arg.ok_or(CommandError::MissingPosition(command))?;
            match arg.parse::<usize>() {
                Ok(position) if position > 0 => Ok(position),
                _ => Err(CommandError::InvalidPosition(arg.to_owned())),
            }
        };

        let command = match name.as_str() {
            "menu" => Self::Menu,
            "show" => Self::Show(position("show", words.next())?),
            "add" => Self::Add(position("add", words.next())?),
            "remove" | "rm" => Self::Remove(position("remove", words.next())?),
            "cart" => Self::Cart,
            "checkout" => Self::Checkout,
            "orders" => Self::Orders,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(line.trim().to_owned())),
        };
        Ok(command)
    }
}

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A cart session over a fixed menu.
///
/// Store changes are reported back to the user through an observer that
/// queues one notice per event; notices are flushed after each command.
pub struct Session {
    catalog: Catalog,
    store: CartStore,
    notices: Rc<RefCell<Vec<String>>>,
}

impl Session {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let mut store = CartStore::new();
        let notices = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&notices);
        store.subscribe(move |event, snapshot| {
            sink.borrow_mut().push(describe(event, snapshot));
        });

        Self {
            catalog,
            store,
            notices,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &CartStore {
        &self.store
    }

    /// Run commands from `input` until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "Type `help` for a list of commands.")?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let flow = match line.parse::<SessionCommand>() {
                Ok(command) => {
                    debug!(?command, "Executing command");
                    self.execute(command, out)?
                }
                Err(e) => {
                    writeln!(out, "error: {e}")?;
                    Flow::Continue
                }
            };
            self.flush_notices(out)?;

            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> io::Result<Flow> {
        match self.apply(command, out) {
            Ok(()) => {}
            Err(ApplyError::Command(e)) => writeln!(out, "error: {e}")?,
            Err(ApplyError::Io(e)) => return Err(e),
        }
        Ok(if command == SessionCommand::Quit {
            Flow::Quit
        } else {
            Flow::Continue
        })
    }

    fn apply<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> Result<(), ApplyError> {
        match command {
            SessionCommand::Menu => write!(out, "{}", MenuView(&self.catalog))?,
            SessionCommand::Show(position) => {
                let item = self
                    .catalog
                    .get_by_position(position)
                    .ok_or(CommandError::NoSuchMenuItem(position))?;
                write!(out, "{}", DetailView(item))?;
            }
            SessionCommand::Add(position) => {
                let item = self
                    .catalog
                    .get_by_position(position)
                    .ok_or(CommandError::NoSuchMenuItem(position))?
                    .clone();
                self.store.add_to_cart(item);
            }
            SessionCommand::Remove(position) => {
                let index = position
                    .checked_sub(1)
                    .ok_or(CommandError::NoSuchCartItem(position))?;
                self.store
                    .try_remove_from_cart(index)
                    .map_err(|_| CommandError::NoSuchCartItem(position))?;
            }
            SessionCommand::Cart => write!(out, "{}", CartView(&self.store))?,
            SessionCommand::Checkout => {
                if self.store.checkout().is_none() {
                    writeln!(out, "Your cart is empty, nothing to check out.")?;
                }
            }
            SessionCommand::Orders => write!(out, "{}", OrdersView(&self.store))?,
            SessionCommand::Help => write!(out, "{HELP}")?,
            SessionCommand::Quit => {}
        }
        Ok(())
    }

    fn flush_notices<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for notice in self.notices.borrow_mut().drain(..) {
            writeln!(out, "{notice}")?;
        }
        Ok(())
    }
}

/// Either a user-facing command error or an output failure.
#[derive(Debug, Error)]
enum ApplyError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn describe(event: &CartEvent, snapshot: CartSnapshot<'_>) -> String {
    let summary = || {
        format!(
            "{} item(s), total {}",
            snapshot.cart_items().len(),
            snapshot.total_price()
        )
    };
    match event {
        CartEvent::ItemAdded { item, .. } => {
            format!("Added {} to cart ({}).", item.name(), summary())
        }
        CartEvent::ItemRemoved { item, .. } => {
            format!("Removed {} from cart ({}).", item.name(), summary())
        }
        CartEvent::CheckedOut { order_number } => {
            let total = snapshot
                .orders()
                .last()
                .map(|order| order.total_price().to_string())
                .unwrap_or_default();
            format!("Placed order #{order_number} ({total}).")
        }
    }
}

/// Run an interactive session on stdin/stdout.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the terminal cannot be
/// read or written.
pub fn run(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = config.load_catalog()?;
    info!(items = catalog.len(), "Starting session");

    let mut session = Session::new(catalog);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session.run(stdin.lock(), &mut stdout)?;

    let store = session.store();
    info!(
        orders = store.orders().len(),
        cart_items = store.cart_len(),
        "Session ended"
    );
    Ok(())
}

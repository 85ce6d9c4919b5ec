//! The interactive inventory form.
//!
//! A main menu leads to the inventory screen, which shows the listing and
//! offers the add/delete/modify actions until the user goes back.

use std::fmt;

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use stocktake::{Config, InventoryStore, Outcome, StoreError, domain::validate::parse_identifier};
use tracing::instrument;

use super::{list::print_listing, terminal::Colorize};

/// The prompts the session needs from the user.
pub trait Form {
    /// Lets the user pick one of `items`, or `None` if they backed out.
    fn choose(&mut self, prompt: &str, items: &[String]) -> anyhow::Result<Option<usize>>;

    /// Reads a line of text, which may be empty.
    fn text(&mut self, prompt: &str) -> anyhow::Result<String>;

    /// Asks a yes/no question, defaulting to no.
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool>;
}

/// A [`Form`] drawn on the terminal.
pub struct Terminal {
    theme: ColorfulTheme,
}

impl Terminal {
    fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Form for Terminal {
    fn choose(&mut self, prompt: &str, items: &[String]) -> anyhow::Result<Option<usize>> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?)
    }

    fn text(&mut self, prompt: &str) -> anyhow::Result<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }

    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Inventory,
    Exit,
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inventory => write!(f, "Go to Inventory"),
            Self::Exit => write!(f, "Exit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Delete,
    Modify,
    RetrySave,
    Back,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "Add item"),
            Self::Delete => write!(f, "Delete item"),
            Self::Modify => write!(f, "Modify stock"),
            Self::RetrySave => write!(f, "Retry save"),
            Self::Back => write!(f, "Back"),
        }
    }
}

/// An interactive session over one inventory.
pub struct Session<F> {
    store: InventoryStore,
    confirm_delete: bool,
    form: F,
}

impl Session<Terminal> {
    /// Loads the configured inventory for an interactive session.
    pub fn open(config: &Config) -> anyhow::Result<Self> {
        let store = InventoryStore::load(config.file())?;
        Ok(Self::new(store, config.confirm_delete, Terminal::new()))
    }
}

impl<F: Form> Session<F> {
    fn new(store: InventoryStore, confirm_delete: bool, form: F) -> Self {
        Self {
            store,
            confirm_delete,
            form,
        }
    }

    /// Runs the main menu until the user exits.
    #[instrument(level = "debug", skip(self))]
    pub fn run(mut self) -> anyhow::Result<()> {
        let choices = [MenuChoice::Inventory, MenuChoice::Exit];
        let labels = labels(&choices);

        loop {
            match self.form.choose("Stocktake", &labels)?.map(|i| choices[i]) {
                Some(MenuChoice::Inventory) => self.manage()?,
                Some(MenuChoice::Exit) | None => break,
            }
        }

        if self.store.has_unsaved_changes() {
            println!(
                "{}",
                format!(
                    "⚠️  Exiting with changes that were never saved to {}",
                    self.store.path().display()
                )
                .warning()
            );
        }
        Ok(())
    }

    fn manage(&mut self) -> anyhow::Result<()> {
        loop {
            self.show_inventory();

            let actions = self.actions();
            let Some(index) = self.form.choose("Manage Inventory", &labels(&actions))? else {
                return Ok(());
            };

            match actions[index] {
                Action::Add => self.add()?,
                Action::Delete => self.delete()?,
                Action::Modify => self.modify()?,
                Action::RetrySave => self.retry_save(),
                Action::Back => return Ok(()),
            }
        }
    }

    fn actions(&self) -> Vec<Action> {
        let mut actions = vec![Action::Add, Action::Delete, Action::Modify];
        if self.store.has_unsaved_changes() {
            actions.push(Action::RetrySave);
        }
        actions.push(Action::Back);
        actions
    }

    fn show_inventory(&self) {
        println!();
        println!("{}", "Inventory".heading());
        print_listing(&self.store.list());
        println!();
    }

    fn add(&mut self) -> anyhow::Result<()> {
        let name = self.form.text("Item Name")?;
        let stock = self.form.text("Stock")?;
        report(self.store.add(&name, &stock));
        Ok(())
    }

    fn delete(&mut self) -> anyhow::Result<()> {
        let id = self.form.text("Item ID to delete")?;

        if self.confirm_delete {
            if let Ok(position) = parse_identifier(&id, self.store.len()) {
                let name = self.store.items()[position.index()].name();
                if !self.form.confirm(&format!("Delete {position} {name}?"))? {
                    println!("{}", "Cancelled".dim());
                    return Ok(());
                }
            }
        }

        report(self.store.delete(&id));
        Ok(())
    }

    fn modify(&mut self) -> anyhow::Result<()> {
        let id = self.form.text("Item ID")?;
        let stock = self.form.text("New stock")?;
        report(self.store.modify_stock(&id, &stock));
        Ok(())
    }

    fn retry_save(&mut self) {
        match self.store.save() {
            Ok(()) => println!("{}", "✅ Inventory saved.".success()),
            Err(e) => println!("{}", e.to_string().warning()),
        }
    }
}

fn labels<T: ToString>(items: &[T]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn report(result: Result<Outcome, StoreError>) {
    match result {
        Ok(outcome) => println!("{}", outcome.to_string().success()),
        Err(StoreError::Rejected(rejection)) => println!("{}", rejection.to_string().warning()),
        Err(e @ StoreError::Unsaved { .. }) => {
            println!("{}", e.to_string().warning());
            println!(
                "{}",
                "The change is kept in memory. Choose 'Retry save' to try again.".dim()
            );
        }
    }
}

use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::stores::{Location, Marina};
use crate::{MarinaError, Result};

const MENU_PROMPT: &str = "\n(I)nventory, (A)dd, (R)emove, (P)ayment, (M)onth, e(X)it : ";
const RULE: &str = "-----------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Inventory,
    Add,
    Remove,
    Payment,
    Month,
    Exit,
}

impl Command {
    /// Maps a menu key to its command, ignoring case.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'i' => Some(Self::Inventory),
            'a' => Some(Self::Add),
            'r' => Some(Self::Remove),
            'p' => Some(Self::Payment),
            'm' => Some(Self::Month),
            'x' => Some(Self::Exit),
            _ => None,
        }
    }
}

/// One interactive session over a marina. Reads commands from `input` and
/// writes prompts and results to `output` until exit or end of input.
pub struct Session<R, W> {
    marina: Marina,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(marina: Marina, input: R, output: W) -> Self {
        Self {
            marina,
            input,
            output,
        }
    }

    /// Runs the menu loop and hands the marina back for saving.
    /// Rejected operations are reported to the user and never end the session;
    /// only I/O failures on `input`/`output` do.
    pub fn run(mut self) -> Result<Marina> {
        while let Some(line) = self.prompt(MENU_PROMPT)? {
            let Some(key) = line.trim().chars().next() else {
                continue;
            };
            match Command::from_key(key) {
                Some(Command::Exit) => break,
                Some(command) => self.execute(command)?,
                None => writeln!(self.output, "Invalid option {}", key.to_ascii_uppercase())?,
            }
        }
        Ok(self.marina)
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Inventory => write_inventory(&mut self.output, &self.marina)?,
            Command::Add => {
                if let Some(record) = self.prompt("Enter boat data (CSV format): ")? {
                    self.report(|marina| marina.add(record.trim()))?;
                }
            }
            Command::Remove => {
                if let Some(name) = self.prompt("Enter boat name to remove: ")? {
                    self.report(|marina| marina.remove(name.trim()).map(|_| ()))?;
                }
            }
            Command::Payment => self.payment()?,
            Command::Month => {
                self.marina.apply_monthly_charges();
                writeln!(self.output, "Monthly charges applied.")?;
            }
            Command::Exit => {}
        }
        Ok(())
    }

    fn payment(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter boat name: ")? else {
            return Ok(());
        };
        let name = name.trim();
        if !self.marina.exists(name) {
            writeln!(self.output, "{}", MarinaError::NoSuchBoat(name.to_string()))?;
            return Ok(());
        }
        let Some(amount) = self.prompt("Enter payment amount: ")? else {
            return Ok(());
        };
        let amount = match Decimal::from_str(amount.trim()) {
            Ok(amount) => amount,
            Err(_) => {
                writeln!(self.output, "{}", MarinaError::InvalidAmount(amount.trim().to_string()))?;
                return Ok(());
            }
        };
        match self.marina.pay(name, amount) {
            Ok(_) => writeln!(self.output, "Payment of ${:.2} accepted for '{}'.", amount, name)?,
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(())
    }

    /// Runs a marina operation, printing the rejection if there is one.
    fn report<F>(&mut self, operation: F) -> Result<()>
    where
        F: FnOnce(&mut Marina) -> Result<()>,
    {
        if let Err(err) = operation(&mut self.marina) {
            writeln!(self.output, "{}", err)?;
        }
        Ok(())
    }

    /// Writes `text` and reads one line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Prints the marina as a table sorted by name.
pub fn write_inventory<W: Write>(mut writer: W, marina: &Marina) -> Result<()> {
    writeln!(writer, "\nBoat Inventory:")?;
    writeln!(writer, "{}", RULE)?;
    for boat in marina.list_sorted() {
        let location = match &boat.location {
            Location::Slip(number) => format!("slip   # {:<5}", number),
            Location::Land(bay) => format!("land      {:<3}", bay),
            Location::Trailer(tag) => format!("trailor {:<8}", tag),
            Location::Storage(number) => format!("storage # {:<5}", number),
        };
        let owed = format!("{:.2}", boat.amount_owed);
        writeln!(
            writer,
            "{:<20} {:>3}' {} Owes ${:>8}",
            boat.name, boat.length, location, owed
        )?;
    }
    writeln!(writer, "{}", RULE)?;
    Ok(())
}

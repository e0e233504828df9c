use std::io::{BufRead, Write};
use kiosk_catalog::{format_price, Menu};
use kiosk_order::{DiscountType, Order};
use crate::error::{KioskError, KioskResult};
use crate::input::{ConsoleInput, Selection};

/// Interactive ordering session over a console.
///
/// The kiosk owns the menus and the single cart for the whole run. Input and
/// output are generic so the binary can bind stdin/stdout and tests can bind
/// in-memory buffers.
pub struct Kiosk<R, W> {
    menus: Vec<Menu>,
    order: Order,
    input: ConsoleInput<R>,
    out: W,
}

impl<R: BufRead, W: Write> Kiosk<R, W> {
    pub fn new(menus: Vec<Menu>, reader: R, out: W) -> Self {
        Self {
            menus,
            order: Order::new(),
            input: ConsoleInput::new(reader),
            out,
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run the main menu until the user exits or input ends
    pub fn run(&mut self) -> KioskResult<()> {
        tracing::info!(categories = self.menus.len(), "Kiosk session started");

        match self.main_loop() {
            Err(KioskError::InputClosed) => {
                tracing::info!("Input closed, ending session");
                writeln!(self.out, "\nExiting the program.")?;
                self.out.flush()?;
                Ok(())
            }
            other => other,
        }
    }

    fn main_loop(&mut self) -> KioskResult<()> {
        loop {
            self.show_main_menu()?;

            let categories = self.menus.len() as i64;
            let max = if self.order.has_items() { categories + 2 } else { categories };
            let choice = match self.input.read_choice(&mut self.out, 0, max)? {
                Selection::Valid(choice) => choice,
                Selection::Retry => continue,
            };

            if choice == 0 {
                writeln!(self.out, "\nExiting the program.")?;
                self.out.flush()?;
                tracing::info!("Kiosk session ended");
                return Ok(());
            }

            if choice <= categories {
                self.browse_category(choice as usize - 1)?;
            } else if choice == categories + 1 {
                self.checkout()?;
            } else if let Err(err) = self.order.cancel_order() {
                writeln!(self.out, "{}", err)?;
            } else {
                writeln!(self.out, "Your order has been cancelled.")?;
            }
        }
    }

    fn show_main_menu(&mut self) -> KioskResult<()> {
        writeln!(self.out, "\n[ MAIN MENU ]")?;
        for (idx, menu) in self.menus.iter().enumerate() {
            writeln!(self.out, "{}. {}", idx + 1, menu.category())?;
        }
        writeln!(self.out, "0. Exit")?;

        if self.order.has_items() {
            let orders = self.menus.len() + 1;
            writeln!(self.out, "[ ORDER MENU ]")?;
            writeln!(self.out, "{}. Orders | Review the cart and place the order.", orders)?;
            writeln!(self.out, "{}. Cancel | Cancel the order in progress.", orders + 1)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Show one category and add at most one item before returning
    fn browse_category(&mut self, idx: usize) -> KioskResult<()> {
        let menu = &self.menus[idx];

        let choice = loop {
            writeln!(self.out, "\n[ {} MENU ]", menu.category())?;
            for (pos, item) in menu.iter().enumerate() {
                writeln!(self.out, "{}. {}", pos + 1, item)?;
            }
            writeln!(self.out, "0. Back")?;
            self.out.flush()?;

            if let Selection::Valid(choice) = self.input.read_choice(&mut self.out, 0, menu.len() as i64)? {
                break choice;
            }
        };

        let Some(item) = menu.item(choice as usize).cloned() else {
            return Ok(());
        };

        writeln!(self.out, "\nSelected: {}", item)?;
        writeln!(self.out, "Add this item to the cart?")?;
        writeln!(self.out, "1. Confirm")?;
        writeln!(self.out, "2. Cancel")?;
        self.out.flush()?;

        if self.read_until_valid(1, 2)? == 1 {
            writeln!(self.out, "{} has been added to the cart.", item.name())?;
            self.order.add_item(item);
        }
        Ok(())
    }

    fn checkout(&mut self) -> KioskResult<()> {
        let summary = match self.order.display_order_details() {
            Ok(summary) => summary,
            Err(err) => {
                writeln!(self.out, "{}", err)?;
                return Ok(());
            }
        };

        write!(self.out, "\n{}", summary)?;
        writeln!(self.out, "1. Place order")?;
        writeln!(self.out, "2. Back to menu")?;
        self.out.flush()?;

        if self.read_until_valid(1, 2)? != 1 {
            return Ok(());
        }

        write!(self.out, "\n{}", DiscountType::display_options())?;
        self.out.flush()?;
        let code = self.read_until_valid(1, DiscountType::all().len() as i64)?;

        let receipt = self.order.complete_order(DiscountType::from_code(code));
        writeln!(self.out, "Your order is complete. The amount is {}.", format_price(receipt.final_price))?;
        writeln!(
            self.out,
            "Order number: {} ({})",
            receipt.order_id,
            receipt.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        Ok(())
    }

    fn read_until_valid(&mut self, min: i64, max: i64) -> KioskResult<i64> {
        loop {
            if let Selection::Valid(choice) = self.input.read_choice(&mut self.out, min, max)? {
                return Ok(choice);
            }
        }
    }
}

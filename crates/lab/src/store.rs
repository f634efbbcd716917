//! Console store: a numbered menu that collects and lists products.

use core::str::FromStr;

use std::io::{self, BufRead, Write};

use compact_str::CompactString;

use lab_mem::{OwnedArray, owned_array::Iter};

use crate::Tokens;

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Product {
    name: CompactString,
    amount: i32,
    price: f64,
}

impl Product {

    pub fn new(name: impl AsRef<str>, amount: i32, price: f64) -> Self {
        Self {
            name: CompactString::new(name),
            amount,
            price,
        }
    }

    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub fn amount(&self) -> i32 {
        self.amount
    }

    #[inline(always)]
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_name(&mut self, name: impl AsRef<str>) {
        self.name = CompactString::new(name);
    }

    pub fn set_amount(&mut self, amount: i32) {
        self.amount = amount;
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    /// Prompts for name, amount and price. `None` if input ends first.
    pub fn read<R: BufRead>(tokens: &mut Tokens<R>, out: &mut impl Write) -> io::Result<Option<Self>> {
        write!(out, "name: ")?;
        out.flush()?;
        tokens.skip_line();
        let Some(name) = tokens.next_line()? else {
            return Ok(None)
        };
        write!(out, "amount: ")?;
        out.flush()?;
        let Some(amount) = tokens.next_token()? else {
            return Ok(None)
        };
        write!(out, "price: ")?;
        out.flush()?;
        let Some(price) = tokens.next_token()? else {
            return Ok(None)
        };
        Ok(Some(Self::new(
            name,
            parse_or_default("amount", &amount),
            parse_or_default("price", &price),
        )))
    }
}

fn parse_or_default<T: FromStr + Default>(field: &str, token: &str) -> T {
    match token.parse() {
        Ok(value) => value,
        Err(_) => {
            lab_log::warn!("invalid {} {:?}, using default", field, token);
            T::default()
        },
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Add,
    Show,
    Exit,
    Unknown(CompactString),
}

impl Command {

    pub fn parse(token: &str) -> Self {
        match token.parse::<i32>() {
            Ok(1) => Self::Add,
            Ok(2) => Self::Show,
            Ok(3) => Self::Exit,
            _ => Self::Unknown(CompactString::new(token)),
        }
    }
}

pub struct Store {
    products: OwnedArray<Product>,
}

impl Store {

    pub fn new() -> Self {
        Self {
            products: OwnedArray::new(),
        }
    }

    /// Opens a store stocked with `product` and announces it on `out`.
    pub fn with_product(product: Product, out: &mut impl Write) -> io::Result<Self> {
        let mut store = Self::new();
        let product = store.add_product(product);
        writeln!(out, "Store is open with: {}", product.name)?;
        Ok(store)
    }

    pub fn add_product(&mut self, product: Product) -> &Product {
        self.products.push_back(product)
    }

    #[inline(always)]
    pub fn products(&self) -> Iter<'_, Product> {
        self.products.iter()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn show(&self, out: &mut impl Write) -> io::Result<()> {
        if self.products.is_empty() {
            return writeln!(out, "Store is empty!")
        }
        for product in &self.products {
            writeln!(out, "- {} {} ({} rub.)", product.name, product.amount, product.price)?;
        }
        writeln!(out, "Products available: {}", self.products.len())
    }

    /// Runs the menu loop until `3` or the end of `input`.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Welcome! Enter a number to:")?;
        writeln!(out, "1. Add a product")?;
        writeln!(out, "2. Show available products")?;
        writeln!(out, "3. Exit")?;
        writeln!(out)?;
        let mut tokens = Tokens::new(input);
        loop {
            out.flush()?;
            let command = match tokens.next_token()? {
                Some(token) => Command::parse(&token),
                None => {
                    lab_log::info!("input ended, leaving the store");
                    Command::Exit
                },
            };
            match command {
                Command::Add => {
                    match Product::read(&mut tokens, out)? {
                        Some(product) => {
                            let product = self.add_product(product);
                            writeln!(out, "Product added: {}", product.name)?;
                        },
                        None => {
                            writeln!(out)?;
                            lab_log::warn!("input ended while reading a product");
                        },
                    }
                },
                Command::Show => self.show(out)?,
                Command::Exit => {
                    writeln!(out, "Goodbye!")?;
                    writeln!(out)?;
                    return Ok(())
                },
                Command::Unknown(token) => {
                    lab_log::debug!("unrecognized command {:?}", token);
                    writeln!(out, "instructions unclear")?;
                },
            }
            writeln!(out)?;
        }
    }
}

impl Default for Store {

    fn default() -> Self {
        Self::new()
    }
}

/// Opens a store, runs the menu over `input` and closes it again.
pub fn session(input: impl BufRead, out: &mut impl Write) -> io::Result<Store> {
    writeln!(out, "Store is open!")?;
    let mut store = Store::new();
    store.run(input, out)?;
    writeln!(out, "Resources are cleared")?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(input: &str) -> (Store, String) {
        let mut out = Vec::new();
        let store = session(input.as_bytes(), &mut out).unwrap();
        (store, String::from_utf8(out).unwrap())
    }

    #[test]
    fn commands_parse() {
        assert_eq!(Command::parse("1"), Command::Add);
        assert_eq!(Command::parse("2"), Command::Show);
        assert_eq!(Command::parse("3"), Command::Exit);
        assert_eq!(Command::parse("4"), Command::Unknown("4".into()));
        assert_eq!(Command::parse("add"), Command::Unknown("add".into()));
    }

    #[test]
    fn add_then_list() {
        let (store, out) = run_session("1\nGreen apple\n15 120\n1\nPear\n3\n7.5\n2\n3\n");
        assert_eq!(store.len(), 2);
        let names: Vec<_> = store.products().map(|product| product.name()).collect();
        assert_eq!(names, vec!["Green apple", "Pear"]);
        assert!(out.starts_with("Store is open!\nWelcome! Enter a number to:\n"));
        assert!(out.contains("name: amount: price: Product added: Green apple\n"));
        assert!(out.contains("- Green apple 15 (120 rub.)\n- Pear 3 (7.5 rub.)\nProducts available: 2\n"));
        assert!(out.ends_with("Goodbye!\n\nResources are cleared\n"));
    }

    #[test]
    fn empty_store_and_unknown_command() {
        let (store, out) = run_session("2\n9\n3\n");
        assert!(store.is_empty());
        assert!(out.contains("Store is empty!\n\n"));
        assert!(out.contains("instructions unclear\n\n"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn end_of_input_exits() {
        let (store, out) = run_session("1\nPlum\n");
        assert!(store.is_empty());
        assert!(out.ends_with("Goodbye!\n\nResources are cleared\n"));
    }

    #[test]
    fn bad_numbers_fall_back_to_zero() {
        let (store, _) = run_session("1\nKiwi\nmany cheap\n3\n");
        let product = store.products().next().unwrap();
        assert_eq!(product, &Product::new("Kiwi", 0, 0.0));
    }

    #[test]
    fn store_with_initial_product() {
        let mut out = Vec::new();
        let store = Store::with_product(Product::new("Apple", 15, 120.0), &mut out).unwrap();
        store.show(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Store is open with: Apple\n- Apple 15 (120 rub.)\nProducts available: 1\n",
        );
    }

    #[test]
    fn setters_update_fields() {
        let mut product = Product::default();
        product.set_name("Milk");
        product.set_amount(2);
        product.set_price(89.9);
        assert_eq!(product, Product::new("Milk", 2, 89.9));
    }
}

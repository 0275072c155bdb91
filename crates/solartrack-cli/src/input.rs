//! Loading customer documents from disk.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{bail, Context, Result};
use log::debug;
use solartrack_core::{Customer, CustomerDocument};

/// Reads every customer from a JSON document.
pub fn load_customers(path: &Path) -> Result<Vec<Customer>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open '{}'", path.display()))?;
    let customers = CustomerDocument::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse customers from '{}'", path.display()))?
        .into_customers();

    debug!("Loaded {} customers from {}", customers.len(), path.display());
    Ok(customers)
}

/// Narrows the customers to those whose id or name matches `selector`.
///
/// Without a selector every customer is returned.
pub fn select<'a>(customers: &'a [Customer], selector: Option<&str>) -> Result<Vec<&'a Customer>> {
    let Some(selector) = selector else {
        return Ok(customers.iter().collect());
    };

    let selected: Vec<&Customer> = customers
        .iter()
        .filter(|customer| {
            customer.id.as_deref() == Some(selector)
                || customer.name.eq_ignore_ascii_case(selector)
        })
        .collect();

    if selected.is_empty() {
        bail!("No customer matches '{selector}'");
    }
    Ok(selected)
}

// Provider listing command

use anyhow::Result;
use chatdeck_contracts::supported_providers;

use crate::output::{print_table, OutputFormat};

pub fn run(output: OutputFormat) -> Result<()> {
    let providers = supported_providers();

    if output.is_text() {
        let rows: Vec<Vec<String>> = providers
            .iter()
            .map(|p| vec![p.name.clone(), p.value.to_string()])
            .collect();
        print_table(&[("NAME", 16), ("VALUE", 14)], &rows);
    } else {
        output.print_value(&providers);
    }

    Ok(())
}

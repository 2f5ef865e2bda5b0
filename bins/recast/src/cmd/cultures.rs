use recast_api::{Culture, DateOrder};

use crate::error::CliError;

pub fn run() -> Result<(), CliError> {
    let current = Culture::current();
    for culture in Culture::all() {
        let order = match culture.date_order {
            DateOrder::Dmy => ["dd", "MM", "yyyy"],
            DateOrder::Mdy => ["MM", "dd", "yyyy"],
            DateOrder::Ymd => ["yyyy", "MM", "dd"],
        };
        let marker = if *culture == current { "*" } else { " " };
        println!(
            "{marker} {:<10} {:>18}  {}",
            culture.display_name(),
            culture.format_number(-1_234_567, 2),
            order.join(culture.date_separator),
        );
    }
    Ok(())
}

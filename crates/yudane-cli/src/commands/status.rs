use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use yudane_core::Rarity;

use super::ShrineArgs;

pub fn run(args: &ShrineArgs) -> Result<(), String> {
    let shrine = super::open_shrine(args)?;
    let believer = shrine.believer();

    println!(
        "  {} No.{}  {}",
        "Believer".bold(),
        believer.id,
        believer.title()
    );
    println!();

    let last_visit = believer
        .last_visit
        .map(|d| d.to_string())
        .unwrap_or_else(|| "—".to_string());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Level".to_string(), believer.level.to_string()]);
    table.add_row(vec![
        "Exp".to_string(),
        format!("{}/{}", believer.exp, believer.exp_to_next_level()),
    ]);
    table.add_row(vec!["Streak".to_string(), format!("{} days", believer.streak)]);
    table.add_row(vec!["Last visit".to_string(), last_visit]);
    table.add_row(vec!["Total visits".to_string(), believer.total_visits.to_string()]);
    table.add_row(vec!["Since".to_string(), believer.created_at.to_string()]);
    for rarity in [Rarity::SuperSuperRare, Rarity::SuperRare, Rarity::Rare] {
        let count = believer.count_for(rarity).unwrap_or_default();
        table.add_row(vec![format!("{} drawn", rarity.code()), count.to_string()]);
    }

    println!("{table}");
    Ok(())
}

use colored::Colorize;

use super::ShrineArgs;

pub fn run(args: &ShrineArgs) -> Result<(), String> {
    let mut shrine = super::open_shrine(args)?;

    if let Some(sealed) = shrine.today_ritual() {
        println!("  {}", "The oracle has already spoken today.".dimmed());
        println!();
        super::print_oracle(&sealed);
        super::print_countdown(&shrine);
        return Ok(());
    }

    let revelation = shrine.perform_ritual().map_err(|e| e.to_string())?;
    super::print_oracle(&revelation.record);

    match revelation.streak_bonus {
        Some(bonus) => println!(
            "  Streak: {} days ({} guaranteed)",
            revelation.streak,
            super::paint(bonus, bonus.code())
        ),
        None => println!("  Streak: {} days", revelation.streak),
    }

    let believer = shrine.believer();
    if revelation.levels_gained > 0 {
        println!(
            "  {} Lv.{} {}",
            "Level up!".green().bold(),
            believer.level,
            believer.title()
        );
    }
    println!(
        "  Exp: {}/{}",
        believer.exp,
        believer.exp_to_next_level()
    );

    Ok(())
}

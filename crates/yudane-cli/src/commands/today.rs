use super::ShrineArgs;

pub fn run(args: &ShrineArgs) -> Result<(), String> {
    let shrine = super::open_shrine(args)?;

    match shrine.today_ritual() {
        Some(record) => {
            super::print_oracle(&record);
            super::print_countdown(&shrine);
        }
        None => println!("  No oracle yet today. Run `yudane draw`."),
    }

    Ok(())
}

use super::ShrineArgs;

pub fn run(args: &ShrineArgs) -> Result<(), String> {
    let shrine = super::open_shrine(args)?;
    super::print_countdown(&shrine);
    Ok(())
}

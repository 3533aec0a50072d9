use onde::{Onde, PathArgs};

fn main() -> Result<(), onde::Error> {
    let onde = Onde::builder().with_file("demos/paths.yml").build()?;

    for (alias, template) in onde.paths() {
        println!("{alias:>14}  {template}");
    }

    // Named arguments first, then positional ones fill what is left
    let log = onde.path(
        "daily_log",
        &PathArgs::new().named("year", "2024").arg("03").arg("01"),
    )?;
    println!("today's log: {log}");

    let scratch = onde.path("scratch", &PathArgs::positional(["experiments"]))?;
    println!("scratch dir: {scratch}");

    Ok(())
}

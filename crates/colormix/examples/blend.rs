use colormix::error::Error;
use colormix::opt::Options;
use colormix::{Cmyk, ColorModel};

fn main() -> Result<(), Error> {
    let palette = ["#ff0000", "#ffff00", "#0000ff", "#ffffff", "#000000"];
    let target = "#6b8e23";

    for model in [ColorModel::Rgb, ColorModel::Cmyk] {
        let blend = colormix::optimize_with(&palette, target, model, Options::with_log())?;

        println!("\n{} blend for {}:", model, target);
        for (color, percentage) in palette.iter().zip(blend.percentages()) {
            println!("    {:>6.2}%  {}  {}", percentage, color, Cmyk::from_hex(color)?);
        }
        println!("    result   {}", blend);
    }

    Ok(())
}

use miette::Result;
use releasebook::run;

fn main() -> Result<()> {
    run()
}

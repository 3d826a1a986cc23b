use identicon::generate;

fn main() {
    // Demo stub: renders one identicon in memory and reports what came out
    let input = "example";
    match generate(input) {
        Ok(rendered) => println!(
            "input={input} color=({},{},{}) cells={} png_bytes={}",
            rendered.color.r,
            rendered.color.g,
            rendered.color.b,
            rendered.grid.len(),
            rendered.png_bytes().len()
        ),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

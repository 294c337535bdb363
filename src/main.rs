use envscribe::{generate_env_file, GeneratorError};

/// Prints the generated `.env` document to stdout. Redirect it wherever it
/// should live; the tool never writes files itself.
fn main() -> Result<(), GeneratorError> {
    env_logger::init();
    let contents = generate_env_file()?;
    print!("{contents}");
    Ok(())
}

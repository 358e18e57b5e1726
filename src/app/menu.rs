use crate::app::report::write_report;
use crate::core::resolver::ProbabilityResolver;
use crate::domain::ports::NationalityProvider;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const MENU: &str = "\n=== Name Nationality Probability Checker ===\n\
1. Check a single name\n\
2. Check multiple names\n\
3. Exit\n";

/// Menu-driven loop over any line reader and writer.
pub struct InteractiveSession<'a, P: NationalityProvider, R: BufRead, W: Write> {
    resolver: &'a ProbabilityResolver<P>,
    input: R,
    output: W,
}

impl<'a, P: NationalityProvider, R: BufRead, W: Write> InteractiveSession<'a, P, R, W> {
    pub fn new(resolver: &'a ProbabilityResolver<P>, input: R, output: W) -> Self {
        Self {
            resolver,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user picks "Exit" or input reaches end of file.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}Choose an option (1-3): ", MENU)?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                break;
            };

            match choice.trim() {
                "1" => {
                    let Some(line) = self.prompt("Enter a name: ")? else {
                        break;
                    };
                    let name = line.trim();
                    if name.is_empty() {
                        writeln!(self.output, "No name entered.")?;
                        continue;
                    }
                    self.check(name).await?;
                }
                "2" => {
                    let Some(line) = self.prompt("Enter names (separated by spaces): ")? else {
                        break;
                    };
                    let names: Vec<&str> = line.split_whitespace().collect();
                    if names.is_empty() {
                        writeln!(self.output, "No names entered.")?;
                        continue;
                    }
                    for name in names {
                        self.check(name).await?;
                    }
                }
                "3" => break,
                other => {
                    tracing::debug!("Invalid menu choice: {:?}", other);
                    writeln!(self.output, "Invalid option. Please try again.")?;
                }
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    async fn check(&mut self, name: &str) -> Result<()> {
        let outcome = self.resolver.resolve(name).await;
        write_report(&mut self.output, name, &outcome)
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf))
    }
}

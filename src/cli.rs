use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Classify grid cells by land-cover type and report carbon statistics",
    long_about = None
)]
pub struct Cli {
    /// Restrict the report to a single land-cover type (exact name match)
    #[arg(short = 'l', long = "landcover", num_args = 1.., value_name = "NAME")]
    pub landcover: Vec<String>,
    /// Add a population standard deviation column to the report
    #[arg(short = 's', long = "stddev")]
    pub stddev: bool,
}

impl Cli {
    /// Multi-word type names may be given unquoted; the collected words are
    /// joined with single spaces before matching.
    pub fn landcover_name(&self) -> Option<String> {
        if self.landcover.is_empty() {
            None
        } else {
            Some(self.landcover.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unquoted_multi_word_names_are_joined() {
        let cli = Cli::parse_from(["landcover-carbon", "-l", "woody", "savannas"]);
        assert_eq!(cli.landcover_name().as_deref(), Some("woody savannas"));
    }

    #[test]
    fn absent_flag_means_no_filter() {
        let cli = Cli::parse_from(["landcover-carbon", "--stddev"]);
        assert_eq!(cli.landcover_name(), None);
        assert!(cli.stddev);
    }

    #[test]
    fn landcover_flag_requires_a_value() {
        assert!(Cli::try_parse_from(["landcover-carbon", "--landcover"]).is_err());
    }
}

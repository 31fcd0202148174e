use hrtool_lib::finance::{self, FinanceResult};
use sysexits::ExitCode;

#[derive(clap::Args, Debug, Clone)]
pub struct Args {
    /// Amount of DP
    #[arg(default_value = "")]
    dp_amount: String,
    /// HRC received per DP
    #[arg(default_value = "")]
    hrc_rate: String,
}

pub fn handle(args: &Args) -> ExitCode {
    let result = finance::calculate(&args.dp_amount, &args.hrc_rate);
    println!("{result}");

    match result {
        FinanceResult::Total { .. } => ExitCode::Ok,
        FinanceResult::MissingInputs => ExitCode::Usage,
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        args: Args,
    }

    #[test]
    fn test_missing_rate_is_usage() {
        let cli = Cli::parse_from(["finance", "10"]);

        assert_eq!(cli.args.hrc_rate, "");
        assert!(matches!(handle(&cli.args), ExitCode::Usage));
    }

    #[test]
    fn test_total_is_ok() {
        let cli = Cli::parse_from(["finance", "10", "2.5"]);

        assert!(matches!(handle(&cli.args), ExitCode::Ok));
    }
}

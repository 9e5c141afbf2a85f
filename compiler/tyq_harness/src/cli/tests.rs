use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn no_arguments_runs_everything_in_parallel() {
    assert_eq!(parse_args(&[]), Ok(Command::Run(RunnerConfig::default())));
}

#[test]
fn flags_and_filter_in_any_order() {
    let expected = Command::Run(RunnerConfig {
        filter: Some("primary_type".into()),
        parallel: false,
        verbose: true,
    });
    assert_eq!(
        parse_args(&args(&["--sequential", "primary_type", "-v"])),
        Ok(expected.clone())
    );
    assert_eq!(
        parse_args(&args(&["-v", "--sequential", "primary_type"])),
        Ok(expected)
    );
}

#[test]
fn list_keeps_the_filter() {
    assert_eq!(
        parse_args(&args(&["--list", "decltype"])),
        Ok(Command::List(Some("decltype".into())))
    );
    assert_eq!(parse_args(&args(&["--list"])), Ok(Command::List(None)));
}

#[test]
fn help_wins() {
    assert_eq!(parse_args(&args(&["x", "--help", "--bogus"])), Ok(Command::Help));
}

#[test]
fn usage_errors() {
    assert_eq!(
        parse_args(&args(&["--parallel=4"])),
        Err(UsageError::UnknownOption("--parallel=4".into()))
    );
    assert_eq!(
        parse_args(&args(&["a", "b"])),
        Err(UsageError::ExtraArgument("b".into()))
    );
}

use std::error::Error;
use std::{env, process};

use kn_vector::vec_model::Vector;
use kn_vector::{create_vector, vec_err};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: kn-vector <x> <y> [revolutions]";

fn parse_number(name: &str, arg: Option<String>) -> Result<Option<f64>, Box<dyn Error>> {
    match arg {
        None => Ok(None),
        Some(arg) => match arg.parse::<f64>() {
            Ok(v) => Ok(Some(v)),
            Err(err) => Err(Box::new(vec_err!(&format!(
                "invalid {} {:?}: {}",
                name, arg, err
            )))),
        },
    }
}

/// parse x, y and optional revolutions (default a quarter turn)
fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<(Vector, f64), Box<dyn Error>> {
    let (x, y) = match (parse_number("x", args.next())?, parse_number("y", args.next())?) {
        (Some(x), Some(y)) => (x, y),
        _ => return Err(Box::new(vec_err!("need both x and y"))),
    };
    let revolutions = parse_number("revolutions", args.next())?.unwrap_or(0.25);
    let extra: Vec<String> = args.collect();
    if !extra.is_empty() {
        return Err(Box::new(vec_err!(&format!(
            "unexpected arguments {:?}, {}",
            extra, USAGE
        ))));
    }
    Ok((create_vector(x, y), revolutions))
}

fn run<I: Iterator<Item = String>>(args: I) -> Result<(), Box<dyn Error>> {
    let (vector, revolutions) = parse_args(args)?;
    vector.print();
    println!("length: {}", vector.length());

    let mut normalized = vector.copy();
    normalized.normalize();
    println!("normalized: {}", normalized);

    let mut rotated = vector.copy();
    rotated.rotate(revolutions);
    println!("rotated {} revolutions: {}", revolutions, rotated);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut args = env::args();
    args.next();
    if args.len() == 0 {
        eprintln!("{}", USAGE);
        process::exit(0);
    }
    if let Err(err) = run(args) {
        eprintln!("kn-vector error: {}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod test_main {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_args() {
        let (v, r) = parse_args(args(&["3", "4"])).unwrap();
        assert_eq!((v, r), (Vector::new(3.0, 4.0), 0.25));
        let (v, r) = parse_args(args(&["-1.5", "2", "0.5"])).unwrap();
        assert_eq!((v, r), (Vector::new(-1.5, 2.0), 0.5));
    }

    #[test]
    fn test_parse_args_rejects() {
        assert!(parse_args(args(&["3"])).is_err());
        let err = parse_args(args(&["3", "4", "turn"])).unwrap_err();
        assert!(err.to_string().contains("invalid revolutions"));
        let err = parse_args(args(&["3", "4", "0.5", "9"])).unwrap_err();
        assert!(err.to_string().contains("unexpected arguments [\"9\"]"));
    }
}

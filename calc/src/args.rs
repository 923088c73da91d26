use structopt::StructOpt;

#[derive(StructOpt, Debug)]
pub struct Args {
    /// Expression(s) to evaluate, each a whitespace-delimited infix
    /// formula, optionally with `| name = value` bindings. With none
    /// given, an interactive prompt starts instead.
    pub expressions: Vec<String>,
}

pub fn load() -> Args {
    Args::from_args()
}

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use clap::Parser;

use resolute::{
    config::{Config, ConstantPreference, Dialect},
    context::Context,
    types::err::ErrorKind,
};

/// Searches for a refutation of a comma-separated clause set by resolution
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The formulas to refute, separated by top-level commas.
    /// The last formula is conventionally the negated goal.
    formulas: String,

    /// How identifiers are classified as variables, constants, functions, and predicates
    #[arg(short, long, value_enum, default_value_t = DialectArg::Lowercase)]
    dialect: DialectArg,

    /// Whether constant-bearing clauses sort early or late on length ties
    #[arg(long, value_enum, default_value_t = ConstantsArg::Early)]
    constants: ConstantsArg,

    /// The number of recorded derivations after which the search aborts
    #[arg(short, long, default_value_t = resolute::config::defaults::STEP_LIMIT)]
    step_limit: usize,

    /// Display search counters on completion
    #[arg(long, default_value_t = false)]
    stats: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum DialectArg {
    /// Any lowercase-led identifier is a variable; no function terms
    Lowercase,
    /// Single lowercase letters are variables; function terms allowed
    SingleLetter,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum ConstantsArg {
    Early,
    Late,
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let config = Config {
        dialect: match args.dialect {
            DialectArg::Lowercase => Dialect::Lowercase,
            DialectArg::SingleLetter => Dialect::SingleLetter,
        },
        constant_preference: match args.constants {
            ConstantsArg::Early => ConstantPreference::Early,
            ConstantsArg::Late => ConstantPreference::Late,
        },
        step_limit: args.step_limit,
    };

    let mut the_context = Context::from_config(config);

    match the_context.add_formulas(&args.formulas) {
        Ok(()) => {}
        Err(ErrorKind::Parse(e)) => {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error reading input: {e:?}");
            std::process::exit(1);
        }
    }

    match the_context.prove() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Context error: {e:?}");
            std::process::exit(1);
        }
    }

    for line in the_context.trace_lines() {
        println!("{line}");
    }

    if args.stats {
        let counters = &the_context.counters;
        println!("Pairs examined:      {}", counters.pairs_examined);
        println!("Resolvents formed:   {}", counters.resolvents_formed);
        println!("Tautologies dropped: {}", counters.tautologies_discarded);
        println!("Resolvents subsumed: {}", counters.resolvents_subsumed);
        println!("Backward subsumed:   {}", counters.backward_subsumed);
        println!("Clauses stored:      {}", the_context.clause_db.total_count());
    }
}

use apicheck::AppConfig;

pub type CmdResult<T> = apicheck::Result<(T, i32)>;

pub mod check;
pub mod decode;
pub mod id;
pub mod secret;

macro_rules! dispatch {
    ($args:expr, $config:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $config))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    config: &AppConfig,
) -> (apicheck::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Check(args) => dispatch!(args, config, check),
        crate::Commands::Id(args) => dispatch!(args, config, id),
        crate::Commands::Secret(args) => dispatch!(args, config, secret),
        crate::Commands::DecodeBase64(args) => dispatch!(args, config, decode),
    }
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ege_core::{
    AvailableReport, InputDocument, QuestionId, Registry, SolveError, SolveReport, SolveRequest, TypesReport,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

const NO_TYPES_MESSAGE: &str = "This question has no types.";

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "ege", version, about = "考试字符串题求解器")]
struct Cli {
    /// 以 JSON 输出结果
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 求解一道考试题
    Solve {
        /// 题号
        #[arg(allow_negative_numbers = true)]
        number: QuestionId,

        /// 数据文件
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// 题型编号
        #[arg(short = 't', long = "type", allow_negative_numbers = true)]
        type_: Option<i64>,

        /// 要统计的字符（题型 3）
        #[arg(short, long = "char")]
        char_: Option<String>,
    },
    /// 列出已实现的题号
    Available,
    /// 列出题目的可用题型
    Types {
        /// 题号
        #[arg(allow_negative_numbers = true)]
        number: QuestionId,
    },
}

fn main() -> ExitCode {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let registry = Registry::builtin();

    match cli.command {
        Commands::Solve { number, file, type_, char_ } => {
            info!(question = number, ?file, ?type_, "solving");

            // 文件在分派前整读；缺失与否交给注册表按顺序判断
            let document = match &file {
                Some(path) => Some(InputDocument::from_path(path).context("load input file")?),
                None => None,
            };
            let request = SolveRequest { question: number, ordinal: type_, target: char_, document };

            let result = ege_core::solve(request)?;
            debug!(result, "solved");

            // 分派成功意味着 type 一定存在
            let report = SolveReport { question: number, ordinal: type_.unwrap_or_default(), result };
            if cli.json {
                print_json(&report)?;
            } else {
                println!("{}", report.result);
            }
        }
        Commands::Available => {
            let report = AvailableReport::from_registry(registry);
            if cli.json {
                print_json(&report)?;
            } else {
                println!("{}", report.to_line());
            }
        }
        Commands::Types { number } => {
            let report = TypesReport::from_registry(registry, number);
            if cli.json {
                print_json(&report)?;
            } else {
                match report.to_lines() {
                    Some(lines) => lines.iter().for_each(|l| println!("{l}")),
                    None => println!("{NO_TYPES_MESSAGE}"),
                }
            }
        }
    }

    Ok(())
}

/// 唯一的错误输出路径：消息写到 stderr；题型无效时附带可用题型列表
fn report(err: &anyhow::Error) {
    eprintln!("{err:#}");
    if let Some(SolveError::InvalidSubType { question, .. }) = err.downcast_ref::<SolveError>() {
        eprintln!("Types available:");
        match TypesReport::from_registry(Registry::builtin(), *question).to_lines() {
            Some(lines) => lines.iter().for_each(|l| eprintln!("{l}")),
            None => eprintln!("{NO_TYPES_MESSAGE}"),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let line = serde_json::to_string(value).context("serialize output")?;
    println!("{line}");
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写 stderr，stdout 只留给答案；默认 warn，RUST_LOG=debug 可查看分派细节
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

use crate::boundary::BoundaryValues;
use crate::build_info;
use crate::solver::SolverParameters;
use clap::Parser;
use std::path::PathBuf;

#[cfg(feature = "profile-with-puffin")]
use std::sync::Mutex;

#[cfg(feature = "profile-with-puffin")]
lazy_static::lazy_static! {
    static ref puffin_server: Mutex<Option<puffin_http::Server>> = {
        println!("Initializing profiling server:");
        let server_addr =
                format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        println!(
                "Run this to view profiling data:  puffin_viewer {server_addr}"
            );
        let server = puffin_http::Server::new(&server_addr).ok();
        Mutex::new(server)
    };
}

/// Steady state heat distribution on a rectangular plate
/// by Jacobi relaxation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Grid rows.
    #[arg(short = 'm', long, default_value = "500")]
    pub rows: usize,

    /// Grid columns.
    #[arg(short = 'n', long, default_value = "500")]
    pub cols: usize,

    /// Stop once the largest change in one iteration is at most this.
    #[arg(short = 'e', long, default_value = "0.001")]
    pub tolerance: f64,

    /// The number of threads to use.
    #[arg(short, long, default_value = "4")]
    pub threads: usize,

    /// Chunk size to use for parallelism.
    #[arg(short, long, default_value = "1000")]
    pub chunk_size: usize,

    /// Fail instead of iterating past this many iterations.
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Temperature of the top edge.
    #[arg(long, default_value = "0.0")]
    pub top: f64,

    /// Temperature of the bottom edge.
    #[arg(long, default_value = "100.0")]
    pub bottom: f64,

    /// Temperature of the left edge.
    #[arg(long, default_value = "100.0")]
    pub left: f64,

    /// Temperature of the right edge.
    #[arg(long, default_value = "100.0")]
    pub right: f64,

    /// Directory for output files, will be created.
    /// WARNING, if this Directory
    /// already exists, current contents will be removed.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Write the converged grid as csv.
    #[arg(long, requires("output_dir"))]
    pub write_csv: bool,

    /// Write the converged grid as a png heat map,
    /// WARNING: we do not check image size, so be reasonable.
    #[arg(short, long, requires("output_dir"))]
    pub write_image: bool,

    /// Only print the final record.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    pub fn solver_parameters(&self) -> SolverParameters {
        SolverParameters {
            rows: self.rows,
            cols: self.cols,
            tolerance: self.tolerance,
            threads: self.threads,
            chunk_size: self.chunk_size,
            max_iterations: self.max_iterations,
            boundary: BoundaryValues {
                top: self.top,
                bottom: self.bottom,
                left: self.left,
                right: self.right,
            },
        }
    }

    pub fn cli_setup(name: &str) -> std::io::Result<Self> {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        if let Some(output_dir) = &args.output_dir {
            let _ = std::fs::remove_dir_all(output_dir);
            std::fs::create_dir_all(output_dir)?;
        }

        #[cfg(feature = "profile-with-puffin")]
        {
            if let Ok(server_lock) = puffin_server.lock() {
                if let Some(server) = server_lock.as_ref() {
                    std::thread::sleep(std::time::Duration::from_secs(2));
                    profiling::puffin::set_scopes_on(true);
                    profiling::finish_frame!();
                    println!("t: {}", server.num_clients());
                }
            }
        }

        Ok(args)
    }

    pub fn csv_path(&self) -> Option<PathBuf> {
        self.output_path("plate.csv")
    }

    pub fn image_path(&self) -> Option<PathBuf> {
        self.output_path("plate.png")
    }

    fn output_path(&self, file: &str) -> Option<PathBuf> {
        self.output_dir.as_ref().map(|dir| {
            let mut result = dir.clone();
            result.push(file);
            result
        })
    }

    pub fn finish(&self) {
        #[cfg(feature = "profile-with-puffin")]
        {
            println!("Flusing profiler");

            // We want to drop the server so we can flush the profiling data
            // https://stackoverflow.com/questions/68866598/how-do-i-free-memory-in-a-lazy-static
            if let Ok(mut server) = puffin_server.lock() {
                server.take();
            }
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn default_args_test() {
        let args = Args::try_parse_from(["heated_plate"]).unwrap();
        let p = args.solver_parameters();
        let d = SolverParameters::default();
        assert_eq!(p.rows, d.rows);
        assert_eq!(p.cols, d.cols);
        assert_eq!(p.tolerance, d.tolerance);
        assert_eq!(p.threads, d.threads);
        assert_eq!(p.chunk_size, d.chunk_size);
        assert_eq!(p.max_iterations, None);
        assert_eq!(p.boundary, BoundaryValues::default());
        assert!(args.csv_path().is_none());
    }

    #[test]
    fn parse_test() {
        let args = Args::try_parse_from([
            "heated_plate",
            "-m",
            "40",
            "-n",
            "60",
            "--tolerance",
            "0.01",
            "--threads",
            "2",
            "--max-iterations",
            "900",
            "--top",
            "25",
            "--output-dir",
            "out",
            "--write-csv",
        ])
        .unwrap();
        let p = args.solver_parameters();
        assert_eq!(p.rows, 40);
        assert_eq!(p.cols, 60);
        assert_eq!(p.tolerance, 0.01);
        assert_eq!(p.threads, 2);
        assert_eq!(p.max_iterations, Some(900));
        assert_eq!(p.boundary.top, 25.0);
        assert_eq!(args.csv_path(), Some(PathBuf::from("out/plate.csv")));
    }

    #[test]
    fn output_requires_dir_test() {
        assert!(Args::try_parse_from(["heated_plate", "--write-csv"]).is_err());
    }
}

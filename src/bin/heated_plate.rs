use heated_plate::cli::Args;
use heated_plate::report::*;
use heated_plate::solver::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::cli_setup("heated_plate")?;
    let params = args.solver_parameters();

    if !args.quiet {
        println!();
        println!("{}", banner(&params));
    }

    let mut solver = Solver::new(params)?;
    let mean = solver.initialize()?;
    if !args.quiet {
        println!();
        println!("{}", mean_record(mean));
        println!();
        println!("{}", table_header());
        println!();
    }

    let mut schedule = PrintSchedule::default();
    let quiet = args.quiet;
    let solution = solver.run_with(|progress| {
        if schedule.due(progress.iteration) && !quiet {
            println!("{}", progress_record(&progress));
        }
    })?;

    println!();
    println!("{}", final_record(&solution));

    if args.write_csv {
        if let Some(path) = args.csv_path() {
            println!("Writing: {:?}", path);
            heated_plate::csv::write_csv_2d_file(&solution.grid, &path)?;
        }
    }

    if args.write_image {
        if let Some(path) = args.image_path() {
            println!("Writing: {:?}", path);
            let (min, max) = params.boundary.range();
            heated_plate::image::image2d(&solution.grid, min, max, &path)?;
        }
    }

    args.finish();

    if !args.quiet {
        println!();
        println!("HEATED_PLATE:");
        println!("  Normal end of execution.");
    }
    Ok(())
}

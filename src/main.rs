use chronospatial::{cpu::Cpu, format_output, input, solver::QuineSolver, Machine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = std::env::args().collect::<Vec<_>>();
    let (fname, part_arg) = match &args[..] {
        [_, fname] => (fname, "1"),
        [_, fname, part_arg] => (fname, part_arg.as_str()),
        _ => {
            println!("expected an input file and optionally 1/2 for part");
            std::process::exit(1);
        }
    };
    if part_arg != "1" && part_arg != "2" {
        println!("part must be 1 or 2, got {}", part_arg);
        std::process::exit(1);
    }

    let text = std::fs::read_to_string(fname)?;
    let (cpu, program) = input::parse(&text)?;
    let time = std::time::Instant::now();

    if part_arg == "1" {
        let output = Machine::new(cpu, &program).run()?;
        println!("{}", format_output(&output));
    } else {
        let Some(a) = QuineSolver::new(&program, cpu.b, cpu.c).solve() else {
            println!("no value of register A reproduces the program");
            std::process::exit(2);
        };
        println!("{}", a);
        let output = Machine::new(Cpu::new(a, cpu.b, cpu.c), &program).run()?;
        println!("{}", format_output(&output));
    }

    println!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}

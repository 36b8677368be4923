use std::cell::RefCell;
use std::rc::Rc;

use clap::{Parser, Subcommand};
use whorl::carousel::view::{ItemView, PanelView, ToggleButtonView};
use whorl::{Carousel, CarouselEvent, Point};

#[derive(Parser, Debug)]
#[command(name = "whorl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Run a scripted open/select/close sequence headlessly and print each
    /// committed layout.
    Simulate {
        /// Item to select once the arc is open
        #[arg(short, long, default_value_t = 4)]
        select: usize,

        /// Simulated frame interval in milliseconds
        #[arg(long, default_value_t = 16)]
        frame_ms: u64,
    },
    /// Write the default config file and print its path.
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { select, frame_ms } => simulate(select, frame_ms),
        Commands::InitConfig => {
            let path = whorl::config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

#[derive(Default)]
struct Board {
    open_panel: Option<usize>,
}

struct SimItem;

impl ItemView for SimItem {
    fn set_position(&mut self, _position: Point) {}
    fn set_scale(&mut self, _scale: f64) {}
    fn set_hit_test_enabled(&mut self, _enabled: bool) {}
}

struct SimToggleButton;

impl ToggleButtonView for SimToggleButton {
    fn animate_scale(&mut self, target_scale: f64, duration: f64) {
        log::info!("toggle button scaling to {target_scale:.2} over {duration}s");
    }
}

struct SimPanels {
    shared: Rc<RefCell<Board>>,
}

impl PanelView for SimPanels {
    fn open_panel(&mut self, index: usize) {
        self.shared.borrow_mut().open_panel = Some(index);
    }

    fn close_panel(&mut self, index: usize) {
        let mut board = self.shared.borrow_mut();
        if board.open_panel == Some(index) {
            board.open_panel = None;
        }
    }

    fn close_all_panels(&mut self) {
        self.shared.borrow_mut().open_panel = None;
    }
}

fn simulate(select: usize, frame_ms: u64) -> anyhow::Result<()> {
    let config = whorl::config::load_or_default();
    let shared = Rc::new(RefCell::new(Board::default()));

    let item_views = (0..config.item_count).map(|_| SimItem).collect();
    let panels = SimPanels {
        shared: shared.clone(),
    };

    let mut carousel = Carousel::new(config, item_views, SimToggleButton, panels)?;
    let dt = frame_ms as f64 / 1000.0;

    println!("-- resting --");
    print_state(&carousel, &shared);

    carousel.handle(CarouselEvent::Toggle);
    run_to_idle(&mut carousel, dt);
    println!("-- opened --");
    print_state(&carousel, &shared);

    carousel.handle(CarouselEvent::Select(select));
    run_to_idle(&mut carousel, dt);
    println!("-- selected {select} --");
    print_state(&carousel, &shared);

    carousel.handle(CarouselEvent::Toggle);
    run_to_idle(&mut carousel, dt);
    println!("-- closed --");
    print_state(&carousel, &shared);

    Ok(())
}

fn run_to_idle<I, T, P>(carousel: &mut Carousel<I, T, P>, dt: f64)
where
    I: ItemView,
    T: ToggleButtonView,
    P: PanelView,
{
    let mut frames = 0u32;
    while carousel.is_animating() {
        carousel.handle(CarouselEvent::Tick(dt));
        frames += 1;
    }
    log::debug!("settled after {frames} frames");
}

fn print_state<I, T, P>(carousel: &Carousel<I, T, P>, shared: &Rc<RefCell<Board>>)
where
    I: ItemView,
    T: ToggleButtonView,
    P: PanelView,
{
    println!("mode: {}", carousel.mode());
    for (index, item) in carousel.items().iter().enumerate() {
        let p = item.position();
        println!(
            "  item {index}: slot {} pos ({:8.2}, {:8.2}) scale {:.2}",
            carousel.slot_of(index),
            p.x,
            p.y,
            item.scale()
        );
    }
    match shared.borrow().open_panel {
        Some(panel) => println!("  open panel: {panel}"),
        None => println!("  open panel: none"),
    }
}

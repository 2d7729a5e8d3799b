use crossterm::{
    cursor::{self, Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use gravity_sandbox::{InteractionMode, RenderSnapshot, SandboxWorld, ScenarioKind, Vector2};
use std::io::{stdout, Result, Stdout, Write};
use std::time::{Duration, Instant};

// Interactive sandbox in the terminal.
// Mouse: press/drag/release per the active tool.
// Keys: 1-6 scenarios, c/g/d/k tools, space pause, f freeze, x delete, q quit.

const FRAME: Duration = Duration::from_millis(33);
const STATUS_LINES: usize = 2;

fn get_terminal_size() -> (usize, usize) {
    match term_size::dimensions() {
        Some((w, h)) => (w, h.saturating_sub(STATUS_LINES).max(1)),
        None => (80, 22),
    }
}

/// Maps between terminal cells and world pixels
struct Viewport {
    columns: usize,
    rows: usize,
    scale: Vector2,
}

impl Viewport {
    fn new(world: &SandboxWorld) -> Self {
        let (columns, rows) = get_terminal_size();
        let bounds = world.config().bounds;
        Self {
            columns,
            rows,
            scale: Vector2::new(bounds.width() / columns as f32, bounds.height() / rows as f32),
        }
    }

    fn to_world(&self, column: u16, row: u16) -> Vector2 {
        Vector2::new(
            (column as f32 + 0.5) * self.scale.x,
            (row as f32 + 0.5) * self.scale.y,
        )
    }

    fn to_cell(&self, point: Vector2) -> Option<(usize, usize)> {
        let column = (point.x / self.scale.x).floor();
        let row = (point.y / self.scale.y).floor();
        if column < 0.0 || row < 0.0 {
            return None;
        }
        let (column, row) = (column as usize, row as usize);
        (column < self.columns && row < self.rows).then_some((column, row))
    }
}

fn main() -> Result<()> {
    let mut world = SandboxWorld::new();
    if world.load_scenario(ScenarioKind::Chain).is_err() {
        eprintln!("could not load the chain scenario");
    }

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide, terminal::SetTitle("Gravity Sandbox"))?;
    terminal::enable_raw_mode()?;

    let result = run(&mut world, &mut stdout);

    execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(world: &mut SandboxWorld, stdout: &mut Stdout) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        let viewport = Viewport::new(world);

        while event::poll(Duration::from_millis(1))? {
            match event::read()? {
                Event::Key(KeyEvent { code, .. }) => match code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') => {
                        world.toggle_pause();
                    }
                    KeyCode::Char('c') => world.set_interaction_mode(InteractionMode::Create),
                    KeyCode::Char('g') => world.set_interaction_mode(InteractionMode::Grab),
                    KeyCode::Char('d') => world.set_interaction_mode(InteractionMode::Delete),
                    KeyCode::Char('k') => world.set_interaction_mode(InteractionMode::Connect),
                    KeyCode::Char('f') => {
                        world.freeze_selected();
                    }
                    KeyCode::Char('x') => {
                        world.delete_selected();
                    }
                    KeyCode::Char(digit @ '1'..='6') => {
                        let index = digit as usize - '1' as usize;
                        if world.load_scenario(ScenarioKind::ALL[index]).is_err() {
                            world.clear();
                        }
                    }
                    _ => {}
                },
                Event::Mouse(MouseEvent { kind, column, row, .. }) => {
                    let point = viewport.to_world(column, row);
                    match kind {
                        MouseEventKind::Down(MouseButton::Left) => world.pointer_down(point),
                        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => world.pointer_move(point),
                        MouseEventKind::Up(MouseButton::Left) => world.pointer_up(point),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let delta = now.duration_since(last_frame).as_secs_f32().min(0.1);
        last_frame = now;
        world.step(delta);

        render(stdout, world, &world.snapshot(), &viewport)?;

        let elapsed = now.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

fn render(stdout: &mut Stdout, world: &SandboxWorld, snapshot: &RenderSnapshot, viewport: &Viewport) -> Result<()> {
    let mut grid = vec![vec![(' ', Color::Reset); viewport.columns]; viewport.rows];

    for link in &snapshot.constraints {
        let [a, b] = link.endpoints;
        let samples = (a.distance(&b) / viewport.scale.x.min(viewport.scale.y)).ceil().max(1.0) as usize;
        for i in 0..=samples {
            if let Some((column, row)) = viewport.to_cell(a.lerp(&b, i as f32 / samples as f32)) {
                grid[row][column] = ('.', Color::DarkGrey);
            }
        }
    }

    for body in &snapshot.bodies {
        let glyph = if body.is_grabbed {
            '@'
        } else if body.is_selected {
            '*'
        } else if body.is_static {
            '#'
        } else {
            match body.shape.shape_type() {
                "Box" => 'B',
                "Polygon" => 'P',
                "Star" => 'S',
                _ => 'o',
            }
        };
        let color = Color::Rgb { r: body.color.r, g: body.color.g, b: body.color.b };
        if let Some((column, row)) = viewport.to_cell(body.position) {
            grid[row][column] = (glyph, color);
        }
    }

    queue!(stdout, cursor::MoveTo(0, 0), Clear(ClearType::All))?;
    for line in &grid {
        for &(glyph, color) in line {
            queue!(stdout, SetForegroundColor(color), Print(glyph))?;
        }
        queue!(stdout, ResetColor, Print("\r\n"))?;
    }

    let status = match world.selected_summary() {
        Some(summary) => format!(
            "{} mass {:.0} speed {:.0}{}",
            summary.shape_type,
            summary.mass,
            summary.speed,
            if summary.is_static { " (frozen)" } else { "" }
        ),
        None => String::from("nothing selected"),
    };
    queue!(
        stdout,
        Print(format!(
            "tool: {} | bodies: {} | links: {} | t = {:.1}s{}\r\n{}",
            world.interaction_mode(),
            world.body_count(),
            world.constraint_count(),
            world.time(),
            if world.is_paused() { " | paused" } else { "" },
            status
        ))
    )?;
    stdout.flush()
}

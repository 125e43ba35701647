/// Terminal host for the cube rotation engine
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use rubik_core::{Camera, CubeEngine, Mesh, Viewport};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tracing::info;

pub mod config;
pub mod renderer;

pub use config::{DisplaySettings, TerminalConfig};
pub use renderer::AsciiRenderer;

/// Main application struct for the terminal cube
pub struct TerminalApp {
    engine: CubeEngine,
    display: DisplaySettings,
    mesh: Mesh,
    camera: Camera,
    renderer: AsciiRenderer,
    columns: u16,
    rows: u16,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
    turns: u32,
}

impl TerminalApp {
    pub fn new(config: TerminalConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_size(config, width, height))
    }

    /// Build the app for a terminal of `columns` x `rows` cells
    pub fn with_size(config: TerminalConfig, columns: u16, rows: u16) -> Self {
        let TerminalConfig { engine, display } = config;
        let camera = Camera::with_aspect(cell_aspect(&display, columns, rows));
        Self {
            engine: CubeEngine::new(engine),
            display,
            mesh: Mesh::cubelet(),
            camera,
            renderer: AsciiRenderer::new(columns as usize, rows as usize),
            columns,
            rows,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
            turns: 0,
        }
    }

    pub fn engine(&self) -> &CubeEngine {
        &self.engine
    }

    pub fn renderer(&self) -> &AsciiRenderer {
        &self.renderer
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;

        let result = self.main_loop();

        // Cleanup
        execute!(
            stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;
        terminal::disable_raw_mode()?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = self.display.frame_time();
        let mut last_tick = Instant::now();

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            while event::poll(Duration::from_millis(0))? {
                let event = event::read()?;
                self.handle_event(event);
            }

            // Update
            let now = Instant::now();
            self.update(now - last_tick);
            last_tick = now;

            // Render
            self.rasterize();
            self.present()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    /// Route one terminal event to the engine
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                kind: KeyEventKind::Press,
                ..
            }) => {
                self.running = false;
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(columns, rows) => self.resize(columns, rows),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (x, y) = self.display.to_pixels(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let picked = self.renderer.pick(mouse.column, mouse.row);
                self.engine.pointer_down(x, y, picked);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                // Rejections are logged by the engine.
                if let Ok(started) = self.engine.pointer_up(x, y) {
                    info!(
                        axis = %started.axis,
                        layer = started.layer_value,
                        direction = started.direction.sign(),
                        "layer turn"
                    );
                }
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let (width, height) = self.display.viewport_px(self.columns, self.rows);
                self.engine.pointer_move(x, y, Viewport::new(width, height));
            }
            _ => {}
        }
    }

    fn resize(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
        self.renderer = AsciiRenderer::new(columns as usize, rows as usize);
        self.camera.aspect = cell_aspect(&self.display, columns, rows);
    }

    /// Advance the engine by one frame
    pub fn update(&mut self, dt: Duration) {
        if self.engine.tick(dt).is_some() {
            self.turns += 1;
        }
    }

    /// Draw every cubelet into the renderer's buffers
    pub fn rasterize(&mut self) {
        self.renderer.clear();
        let view_projection = self.camera.view_projection();
        for cubelet in self.engine.registry().iter() {
            let model = self.engine.cubelet_transform(cubelet);
            self.renderer
                .render_cubelet(&self.mesh, &model, &view_projection, cubelet.id());
        }
    }

    fn present(&self) -> io::Result<()> {
        let mut stdout = stdout();
        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        let status = if self.engine.is_turning() { "turning" } else { "idle" };
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Rubik | FPS: {:.1} | Turns: {} | {} | Drag a cubelet to turn its layer, Q=Quit",
                self.fps, self.turns, status
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// Aspect ratio of the terminal in pixels rather than cells. An empty
/// terminal counts as one cell so the projection stays valid.
fn cell_aspect(display: &DisplaySettings, columns: u16, rows: u16) -> f32 {
    let (width, height) = display.viewport_px(columns.max(1), rows.max(1));
    width / height
}

/// Terminal renderer for the host binary.
///
/// Reads a `SimulationState` and queues crossterm commands for it. World
/// coordinates are scaled onto whatever terminal size the host reports.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use nebula_strike::entities::{
    ActivePower, Bullet, BulletMotion, Enemy, EnemyKind, PowerKind, PowerUp, SimulationState,
};
use nebula_strike::geometry::Vec2;
use nebula_strike::hud::Hud;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_HP: Color = Color::Green;
const C_HUD_POWER: Color = Color::Cyan;
const C_PLAYER: Color = Color::White;
const C_SHIELD: Color = Color::Cyan;
const C_STAR: Color = Color::DarkGrey;
const C_BULLET: Color = Color::Yellow;
const C_BULLET_HOMING: Color = Color::Red;
const C_ENEMY: Color = Color::Blue;
const C_BOSS: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

const HP_BAR_CELLS: u32 = 10;

/// Terminal rectangle the playfield is drawn into.
struct Viewport {
    cols: u16,
    rows: u16,
    world_w: f64,
    world_h: f64,
}

impl Viewport {
    // Row 0 is the HUD, row 1 the top border, rows-2 the bottom border and
    // rows-1 the controls hint.
    fn project(&self, pos: Vec2) -> Option<(u16, u16)> {
        let inner_w = self.cols.saturating_sub(2) as f64;
        let inner_h = self.rows.saturating_sub(4) as f64;
        if pos.x < 0.0 || pos.y < 0.0 || pos.x >= self.world_w || pos.y >= self.world_h {
            return None;
        }
        let col = 1 + (pos.x / self.world_w * inner_w) as u16;
        let row = 2 + (pos.y / self.world_h * inner_h) as u16;
        Some((col, row))
    }

    /// Print `text` at a world position if it fits inside the border.
    fn put<W: Write>(&self, out: &mut W, pos: Vec2, text: &str, color: Color) -> std::io::Result<()> {
        let Some((col, row)) = self.project(pos) else {
            return Ok(());
        };
        let max_col = self.cols.saturating_sub(1);
        let visible: String = text
            .chars()
            .take(max_col.saturating_sub(col) as usize)
            .collect();
        if visible.is_empty() {
            return Ok(());
        }
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(visible))?;
        Ok(())
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame onto a `cols` x `rows` terminal.
pub fn render<W: Write>(
    out: &mut W,
    state: &SimulationState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let view = Viewport {
        cols,
        rows,
        world_w: state.playfield.width,
        world_h: state.playfield.height,
    };
    let hud = Hud::from_state(state);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &view)?;
    draw_hud(out, &hud)?;

    for star in &state.stars {
        let glyph = if star.size > 1.8 { "·" } else { "." };
        view.put(out, star.pos, glyph, C_STAR)?;
    }
    for item in &state.power_ups {
        draw_power_up(out, &view, item)?;
    }
    draw_player(out, &view, state)?;
    for bullet in &state.bullets {
        draw_bullet(out, &view, bullet)?;
    }
    for enemy in &state.enemies {
        draw_enemy(out, &view, enemy)?;
    }

    draw_controls_hint(out, &view)?;

    if let Some(message) = hud.overlay {
        draw_overlay(out, &view, message, hud.score)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, hud: &Hud) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}  ", hud.score)))?;

    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(format!("Lives: {:<3}  ", "♥".repeat(hud.lives as usize))))?;

    let filled = (hud.hp * HP_BAR_CELLS + 99) / 100;
    out.queue(style::SetForegroundColor(C_HUD_HP))?;
    out.queue(Print(format!(
        "HP [{}{}]  ",
        "█".repeat(filled as usize),
        "·".repeat((HP_BAR_CELLS - filled) as usize)
    )))?;

    out.queue(style::SetForegroundColor(C_HUD_POWER))?;
    out.queue(Print(&hud.power))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, view: &Viewport, state: &SimulationState) -> std::io::Result<()> {
    let p = &state.player;
    match p.power {
        ActivePower::Shield { .. } => view.put(out, p.pos, "(=>", C_SHIELD),
        _ => view.put(out, p.pos, "=>", C_PLAYER),
    }
}

fn draw_bullet<W: Write>(out: &mut W, view: &Viewport, bullet: &Bullet) -> std::io::Result<()> {
    match bullet.motion {
        BulletMotion::Straight => view.put(out, bullet.pos, "-", C_BULLET),
        BulletMotion::Angled { .. } => view.put(out, bullet.pos, "~", C_BULLET),
        BulletMotion::Homing => view.put(out, bullet.pos, "•", C_BULLET_HOMING),
    }
}

fn draw_enemy<W: Write>(out: &mut W, view: &Viewport, enemy: &Enemy) -> std::io::Result<()> {
    match enemy.kind {
        EnemyKind::Grunt => view.put(out, enemy.pos, "<o", C_ENEMY),
        EnemyKind::Swift => view.put(out, enemy.pos, "<<", Color::Magenta),
        EnemyKind::Tank => view.put(out, enemy.pos, "[#]", Color::DarkYellow),
        EnemyKind::Zigzag => view.put(out, enemy.pos, "≶", Color::Green),
        EnemyKind::Boss => {
            // Three rows around the centre:
            //   /¯¯\
            //  <BOSS
            //   \__/
            let row_h = view.world_h / view.rows.saturating_sub(4).max(1) as f64;
            let above = Vec2::new(enemy.pos.x, enemy.pos.y - row_h);
            let below = Vec2::new(enemy.pos.x, enemy.pos.y + row_h);
            view.put(out, above, " /¯¯\\", C_BOSS)?;
            view.put(out, enemy.pos, "<BOSS", C_BOSS)?;
            view.put(out, below, " \\__/", C_BOSS)
        }
    }
}

fn draw_power_up<W: Write>(out: &mut W, view: &Viewport, item: &PowerUp) -> std::io::Result<()> {
    let (glyph, color) = match item.kind {
        PowerKind::RapidFire => ("[R]", Color::Green),
        PowerKind::Shield => ("[S]", Color::Cyan),
        PowerKind::TripleShot => ("[T]", Color::DarkYellow),
        PowerKind::SpeedBoost => ("[V]", Color::Yellow),
        PowerKind::Homing => ("[H]", Color::Red),
    };
    view.put(out, item.pos, glyph, color)
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("←↑↓→ / WASD : Move   SPACE / J : Shoot   R : Restart   Q : Quit"))?;
    Ok(())
}

// ── End-of-game overlay ───────────────────────────────────────────────────────

fn draw_overlay<W: Write>(out: &mut W, view: &Viewport, message: &str, score: u32) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", score);
    let width = message.chars().count() + 4;
    let top = format!("╔{}╗", "═".repeat(width));
    let middle = format!("║  {}  ║", message);
    let bottom = format!("╚{}╝", "═".repeat(width));
    let lines: [(&str, Color); 4] = [
        (&top, Color::White),
        (&middle, Color::White),
        (&bottom, Color::White),
        (&score_line, Color::Yellow),
    ];

    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}

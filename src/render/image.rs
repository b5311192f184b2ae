/*
AoC Herald: A Discord webhook herald for Advent of Code private leaderboards.
Copyright (C) 2024 AoC Herald contributors

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
use std::io::Cursor;

use ab_glyph::{Font, FontVec, ScaleFont};
use anyhow::{anyhow, Context as _};
use image::{ImageFormat, RgbImage};

use crate::leaderboard::{stars::star_runs, Member, LAST_PUZZLE_DAY};

use super::{
    cell_len, format_solve_time, max_name_len, star_rgb, BG, DAILY_BASE_WIDTH, DAILY_HEADER_ROWS,
    DAILY_NAME_COL, DAILY_PART1_COL, DAILY_PART2_COL, DAY_HEADER_COL, FONT_HEIGHT, FONT_SIZE,
    FONT_WIDTH, GOLD, GREEN, GREY, NO_SOLUTIONS_HEIGHT, NO_SOLUTIONS_WIDTH, OVERALL_BASE_WIDTH,
    OVERALL_HEADER_ROWS, OVERALL_NAME_COL, OVERALL_STARS_COL, SILVER, WHITE,
};

pub fn load_font(path: &str) -> anyhow::Result<FontVec> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to read font file {}", path))?;
    FontVec::try_from_vec(data).map_err(|e| anyhow!("Failed to parse font file {}: {}", path, e))
}

/// A character-cell canvas over an RGB image. Text lands on an
/// 8x20-pixel grid; positions are given in cells, not pixels.
struct Canvas {
    img: RgbImage,
}

impl Canvas {
    fn new(width_cells: usize, height_cells: usize) -> Self {
        let img = RgbImage::from_pixel(
            width_cells as u32 * FONT_WIDTH,
            height_cells as u32 * FONT_HEIGHT,
            image::Rgb(BG),
        );
        Self { img }
    }

    fn draw_text(&mut self, font: &FontVec, col: usize, row: usize, text: &str, color: super::Rgb) {
        let scaled = font.as_scaled(FONT_SIZE);
        let (width, height) = self.img.dimensions();
        let baseline = row as f32 * FONT_HEIGHT as f32 + scaled.ascent();
        let mut x = (col as u32 * FONT_WIDTH) as f32;

        for ch in text.chars() {
            let glyph = font
                .glyph_id(ch)
                .with_scale_and_position(FONT_SIZE, ab_glyph::point(x, baseline));
            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let img = &mut self.img;
                outlined.draw(|gx, gy, coverage| {
                    let px = bounds.min.x as i32 + gx as i32;
                    let py = bounds.min.y as i32 + gy as i32;
                    if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                        let pixel = img.get_pixel_mut(px as u32, py as u32);
                        for channel in 0..3 {
                            pixel.0[channel] = blend(pixel.0[channel], color[channel], coverage);
                        }
                    }
                });
            }
            // fixed cell advance keeps the layout column-absolute
            x += FONT_WIDTH as f32;
        }
    }

    fn draw_centered(&mut self, font: &FontVec, width_cells: usize, row: usize, text: &str) {
        let col = width_cells.saturating_sub(cell_len(text)) / 2;
        self.draw_text(font, col, row, text, WHITE);
    }

    fn encode_png(&self) -> anyhow::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.img
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .context("Failed to encode the leaderboard PNG")?;
        Ok(bytes)
    }
}

fn blend(dst: u8, src: u8, coverage: f32) -> u8 {
    (dst as f32 * (1.0 - coverage) + src as f32 * coverage).round() as u8
}

fn overall_canvas_cells(member_count: usize, max_name: usize) -> (usize, usize) {
    (
        OVERALL_BASE_WIDTH + max_name,
        OVERALL_HEADER_ROWS + member_count,
    )
}

fn daily_canvas_cells(member_count: usize, max_name: usize) -> (usize, usize) {
    (
        DAILY_BASE_WIDTH + max_name,
        DAILY_HEADER_ROWS + member_count,
    )
}

/// Renders the overall ranking as a PNG: title, day-number header, then
/// one row per member with rank, score, star track and name.
pub fn overall_image(ranked: &[Member], day: u32, font: &FontVec) -> anyhow::Result<Vec<u8>> {
    let (width, height) = overall_canvas_cells(ranked.len(), max_name_len(ranked));
    let mut canvas = Canvas::new(width, height);

    canvas.draw_centered(font, width, 0, "Overall Leaderboard");
    draw_day_header(&mut canvas, font, day);

    for (i, member) in ranked.iter().enumerate() {
        let row = OVERALL_HEADER_ROWS + i;
        canvas.draw_text(
            font,
            1,
            row,
            &format!("{:>2}) {:>4}", i + 1, member.score),
            WHITE,
        );

        let mut col = OVERALL_STARS_COL;
        for run in star_runs(member, day) {
            canvas.draw_text(font, col, row, &"*".repeat(run.len), star_rgb(run.level));
            col += run.len;
        }

        canvas.draw_text(font, OVERALL_NAME_COL, row, &member.name, WHITE);
    }

    canvas.encode_png()
}

/// Two-row header over the star track: tens digits above units digits of
/// the day numbers, colored green up to the current day and grey past it.
fn draw_day_header(canvas: &mut Canvas, font: &FontVec, day: u32) {
    let mut color = GREEN;
    for day_num in 1..=LAST_PUZZLE_DAY {
        let col = DAY_HEADER_COL + day_num as usize;
        if day_num >= 10 {
            canvas.draw_text(font, col, 1, &(day_num / 10).to_string(), color);
        }
        canvas.draw_text(font, col, 2, &(day_num % 10).to_string(), color);
        if day_num == day {
            color = GREY;
        }
    }
}

/// Canvas size decision for the daily view. The empty-set check happens
/// here, before any name-length computation.
#[derive(Debug, PartialEq, Eq)]
enum DailyLayout {
    NoSolutions,
    Ranked { width: usize, height: usize },
}

fn daily_layout(ranked: &[&Member]) -> DailyLayout {
    if ranked.is_empty() {
        return DailyLayout::NoSolutions;
    }
    let max_name = max_name_len(ranked.iter().copied());
    let (width, height) = daily_canvas_cells(ranked.len(), max_name);
    DailyLayout::Ranked { width, height }
}

/// Renders the current-day ranking as a PNG. With no qualifying members
/// this falls back to a fixed small canvas instead of computing a layout
/// over an empty set.
pub fn daily_image(
    ranked: &[&Member],
    day: u32,
    unlock_ts: i64,
    font: &FontVec,
) -> anyhow::Result<Vec<u8>> {
    let title = format!("Leaderboard for Day {}", day);

    let (width, height) = match daily_layout(ranked) {
        DailyLayout::NoSolutions => {
            let mut canvas = Canvas::new(NO_SOLUTIONS_WIDTH, NO_SOLUTIONS_HEIGHT);
            canvas.draw_centered(font, NO_SOLUTIONS_WIDTH, 0, &title);
            canvas.draw_centered(
                font,
                NO_SOLUTIONS_WIDTH,
                2,
                &format!("No one solved Day {} :(", day),
            );
            return canvas.encode_png();
        }
        DailyLayout::Ranked { width, height } => (width, height),
    };

    let mut canvas = Canvas::new(width, height);

    canvas.draw_centered(font, width, 0, &title);
    canvas.draw_text(font, DAILY_PART1_COL, 1, "-Part 1-", SILVER);
    canvas.draw_text(font, DAILY_PART2_COL, 1, "-Part 2-", GOLD);
    canvas.draw_text(font, DAILY_PART1_COL + 4, 2, "Time", SILVER);
    canvas.draw_text(font, DAILY_PART2_COL + 4, 2, "Time", GOLD);

    for (i, member) in ranked.iter().enumerate() {
        let row = DAILY_HEADER_ROWS + i;
        canvas.draw_text(font, 1, row, &format!("{:>2})", i + 1), WHITE);

        let times = format!(
            "{:>8}   {:>8}",
            format_solve_time(member.part_times.0, unlock_ts),
            format_solve_time(member.part_times.1, unlock_ts),
        );
        canvas.draw_text(font, DAILY_PART1_COL, row, &times, WHITE);

        canvas.draw_text(font, DAILY_NAME_COL, row, &member.name, WHITE);
    }

    canvas.encode_png()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn member(name: &str) -> Member {
        Member {
            name: name.to_string(),
            score: 0,
            completion: BTreeMap::new(),
            part_times: (Some(100), None),
        }
    }

    #[test]
    fn test_canvas_is_cell_sized_and_background_filled() {
        let canvas = Canvas::new(5, 3);
        assert_eq!(
            canvas.img.dimensions(),
            (5 * FONT_WIDTH, 3 * FONT_HEIGHT)
        );
        assert_eq!(canvas.img.get_pixel(0, 0).0, BG);
        assert_eq!(
            canvas
                .img
                .get_pixel(5 * FONT_WIDTH - 1, 3 * FONT_HEIGHT - 1)
                .0,
            BG
        );
    }

    #[test]
    fn test_overall_layout_dimensions() {
        // 36 base cells plus the longest name, 3 header rows plus members
        assert_eq!(overall_canvas_cells(4, 10), (46, 7));
    }

    #[test]
    fn test_daily_layout_dimensions() {
        assert_eq!(daily_canvas_cells(2, 8), (40, 5));
    }

    #[test]
    fn test_no_solutions_canvas_is_fixed() {
        let canvas = Canvas::new(NO_SOLUTIONS_WIDTH, NO_SOLUTIONS_HEIGHT);
        assert_eq!(
            canvas.img.dimensions(),
            (
                NO_SOLUTIONS_WIDTH as u32 * FONT_WIDTH,
                NO_SOLUTIONS_HEIGHT as u32 * FONT_HEIGHT
            )
        );
    }

    #[test]
    fn test_empty_daily_ranking_uses_the_fallback_layout() {
        // nobody solved yet: the fixed canvas is chosen and no
        // name-length pass runs over the empty set
        assert_eq!(daily_layout(&[]), DailyLayout::NoSolutions);
    }

    #[test]
    fn test_daily_layout_sizes_from_the_ranked_set() {
        let solver = member("solver");
        let other = member("longer_name");
        let ranked = vec![&solver, &other];

        assert_eq!(
            daily_layout(&ranked),
            DailyLayout::Ranked {
                width: DAILY_BASE_WIDTH + "longer_name".len(),
                height: DAILY_HEADER_ROWS + 2,
            }
        );
    }
}

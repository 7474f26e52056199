//! 布局原语
//!
//! 所有页面都渲染成 `Text<'static>`，再由这些函数拼接、对齐、裁剪。
//! 边框和区域内的摆放交给 ratatui 的 widget，画在离屏 `Buffer` 上再转回文本。
//! 宽度按终端显示宽度计算（CJK、emoji 占两列）。
//!
//! 拼接函数的对齐参数是 `0.0..=1.0` 的小数：0 为左/上，0.5 居中，1 为右/下。

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 左 / 上
pub const START: f32 = 0.0;
/// 居中
pub const CENTER: f32 = 0.5;
/// 右 / 下
pub const END: f32 = 1.0;

/// 一行的显示宽度
pub fn line_width(line: &Line<'_>) -> usize {
    line.spans
        .iter()
        .map(|span| UnicodeWidthStr::width(span.content.as_ref()))
        .sum()
}

/// 最宽一行的显示宽度
pub fn text_width(text: &Text<'_>) -> usize {
    text.lines.iter().map(line_width).max().unwrap_or(0)
}

/// 按显示宽度截断，不会切开宽字符
pub fn truncate_line(line: Line<'static>, max_width: usize) -> Line<'static> {
    if line_width(&line) <= max_width {
        return line;
    }

    let style = line.style;
    let mut spans = Vec::new();
    let mut used = 0;

    'spans: for span in line.spans {
        let mut content = String::new();
        for c in span.content.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > max_width {
                if !content.is_empty() {
                    spans.push(Span::styled(content, span.style));
                }
                break 'spans;
            }
            used += w;
            content.push(c);
        }
        spans.push(Span::styled(content, span.style));
    }

    Line::from(spans).style(style)
}

/// 按单词折行，单词本身超宽时按字符切开；`width` 为 0 时返回空
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        let sep = usize::from(!current.is_empty());

        if used + sep + word_width <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            used += sep + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                used = 0;
            }
            current.push(c);
            used += w;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// 截断并用空格补齐到恰好 `width` 列
pub fn pad_line(line: Line<'static>, width: usize, align: f32) -> Line<'static> {
    let line = truncate_line(line, width);
    let gap = width.saturating_sub(line_width(&line));
    if gap == 0 {
        return line;
    }

    let left = offset(gap, align);
    let right = gap - left;
    let style = line.style;

    let mut spans = Vec::with_capacity(line.spans.len() + 2);
    if left > 0 {
        spans.push(Span::raw(" ".repeat(left)));
    }
    spans.extend(line.spans);
    if right > 0 {
        spans.push(Span::raw(" ".repeat(right)));
    }
    Line::from(spans).style(style)
}

/// 上下拼接，各块按 `align` 在最宽块的宽度内水平对齐
pub fn join_vertical(
    align: f32,
    blocks: impl IntoIterator<Item = Text<'static>>,
) -> Text<'static> {
    let blocks: Vec<Text<'static>> = blocks.into_iter().collect();
    let width = blocks.iter().map(text_width).max().unwrap_or(0);

    let lines: Vec<Line<'static>> = blocks
        .into_iter()
        .flat_map(|block| block.lines)
        .map(|line| pad_line(line, width, align))
        .collect();
    Text::from(lines)
}

/// 左右拼接，各块按 `align` 在最高块的高度内垂直对齐
pub fn join_horizontal(
    align: f32,
    blocks: impl IntoIterator<Item = Text<'static>>,
) -> Text<'static> {
    let blocks: Vec<Text<'static>> = blocks.into_iter().collect();
    let height = blocks.iter().map(|b| b.lines.len()).max().unwrap_or(0);
    let mut rows: Vec<Vec<Span<'static>>> = vec![Vec::new(); height];

    for block in blocks {
        let width = text_width(&block);
        let top = offset(height - block.lines.len(), align);
        let mut lines = block.lines.into_iter();

        for (i, row) in rows.iter_mut().enumerate() {
            let line = if i >= top { lines.next() } else { None };
            row.extend(pad_line(line.unwrap_or_default(), width, START).spans);
        }
    }

    Text::from(rows.into_iter().map(Line::from).collect::<Vec<_>>())
}

/// 在 `width x height` 的离屏缓冲区里绘制，再把缓冲区转回 `Text`
///
/// 结果恰好 `height` 行，每行恰好 `width` 列；面积为 0 时返回空。
pub fn draw(width: u16, height: u16, render: impl FnOnce(Rect, &mut Buffer)) -> Text<'static> {
    if width == 0 || height == 0 {
        return Text::default();
    }

    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    render(area, &mut buf);
    buffer_to_text(&buf)
}

/// 相邻同样式的单元格合并为一个 span；宽字符后面被占用的单元格跳过
fn buffer_to_text(buf: &Buffer) -> Text<'static> {
    let lines: Vec<Line<'static>> = buf
        .content
        .chunks(usize::from(buf.area.width))
        .map(|row| {
            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut skip = 0;
            for cell in row {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                let symbol = cell.symbol();
                skip = UnicodeWidthStr::width(symbol).saturating_sub(1);
                let style = cell.style();
                match spans.last_mut() {
                    Some(last) if last.style == style => last.content.to_mut().push_str(symbol),
                    _ => spans.push(Span::styled(symbol.to_string(), style)),
                }
            }
            Line::from(spans)
        })
        .collect();
    Text::from(lines)
}

/// 把 `text` 放进 `width x height` 的区域，超出部分裁掉，不足部分补空白
pub fn place(
    width: u16,
    height: u16,
    horizontal: Flex,
    vertical: Flex,
    text: Text<'static>,
) -> Text<'static> {
    let block_width = u16::try_from(text_width(&text)).unwrap_or(u16::MAX);
    let block_height = u16::try_from(text.lines.len()).unwrap_or(u16::MAX);

    draw(width, height, |area, buf| {
        let [row] = Layout::vertical([Constraint::Length(block_height)])
            .flex(vertical)
            .areas(area);
        let [cell] = Layout::horizontal([Constraint::Length(block_width)])
            .flex(horizontal)
            .areas(row);
        Paragraph::new(text).render(cell, buf);
    })
}

/// 把 `gap` 列按比例分到左侧
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn offset(gap: usize, align: f32) -> usize {
    let align = align.clamp(0.0, 1.0);
    ((gap as f32 * align).round() as usize).min(gap)
}

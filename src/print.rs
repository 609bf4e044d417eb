use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::histogram::Histogram;

pub fn tabulate(histogram: &Histogram) -> Table {
    let total = histogram.total();
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(14)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec!["Descents".into(), "Permutations".into(), "Share".into()],
        ));

    for (descents, &count) in histogram.iter().enumerate() {
        let share = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        };
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{descents}").into(),
                format!("{count}").into(),
                format!("{:.3}%", share * 100.0).into(),
            ],
        ));
    }

    table.push_row(Row::new(
        Styles::default().with(Header(true)),
        vec!["Total".into(), format!("{total}").into(), "".into()],
    ));
    table
}

#[cfg(test)]
mod tests {
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;

    use super::*;

    #[test]
    fn tabulate_size_3() {
        let table = tabulate(&Histogram::from(vec![1, 4, 1]));
        let rendered = Console::default().render(&table).to_string();
        assert!(rendered.contains("Permutations"), "{rendered}");
        assert!(rendered.contains("66.667%"), "{rendered}");
        assert!(rendered.contains("16.667%"), "{rendered}");
        assert!(rendered.contains("Total"), "{rendered}");
    }
}

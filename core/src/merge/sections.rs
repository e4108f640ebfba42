use super::MergedRaid;

/// Merged raids of one expansion era.
#[derive(Debug, Clone, PartialEq)]
pub struct EraSection<'a> {
    pub version: &'a str,
    pub raids: Vec<&'a MergedRaid>,
}

/// Bucket merged raids by era.
///
/// Sections follow `era_order`; eras it does not list come last, in the order
/// they first appear. Raids inside a section keep their grouping order.
pub fn sections<'a, S: AsRef<str>>(
    merged: &'a [MergedRaid],
    era_order: &[S],
) -> Vec<EraSection<'a>> {
    let mut sections: Vec<EraSection<'a>> = Vec::new();

    for raid in merged {
        match sections.iter_mut().find(|s| s.version == raid.version()) {
            Some(section) => section.raids.push(raid),
            None => sections.push(EraSection {
                version: raid.version(),
                raids: vec![raid],
            }),
        }
    }

    let rank = |version: &str| {
        era_order
            .iter()
            .position(|era| era.as_ref() == version)
            .unwrap_or(usize::MAX)
    };
    sections.sort_by_key(|s| rank(s.version));
    sections
}

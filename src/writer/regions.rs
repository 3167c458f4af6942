use crate::artifact::markers::{marker_on_line, MarkerEdge};
use crate::artifact::RegionFamily;
use std::collections::HashMap;

/// Hand-written lines recovered from between marker pairs, keyed by region
/// family and occurrence ordinal within the file.
///
/// Ordinals matter because a group file repeats each family once per
/// concatenated item; the nth body region of the old file reinjects into the
/// nth body region of the new skeleton.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomRegions {
    regions: HashMap<(RegionFamily, usize), Vec<String>>,
}

impl CustomRegions {
    /// Pull custom regions out of previously generated content.
    ///
    /// Text outside any marker pair is discarded; an unterminated region
    /// keeps whatever was collected up to end of file.
    pub fn extract(lines: &[String]) -> CustomRegions {
        let mut regions = HashMap::new();
        let mut ordinals: HashMap<RegionFamily, usize> = HashMap::new();
        let mut open: Option<(RegionFamily, Vec<String>)> = None;
        for line in lines {
            match (marker_on_line(line), &mut open) {
                (Some((family, MarkerEdge::Begin)), None) => {
                    open = Some((family, Vec::new()));
                }
                (Some((family, MarkerEdge::End)), Some((open_family, collected)))
                    if family == *open_family =>
                {
                    let ordinal = ordinals.entry(family).or_insert(0);
                    if !collected.is_empty() {
                        regions.insert((family, *ordinal), std::mem::take(collected));
                    }
                    *ordinal += 1;
                    open = None;
                }
                (_, Some((_, collected))) => collected.push(line.clone()),
                _ => {}
            }
        }
        if let Some((family, collected)) = open {
            if !collected.is_empty() {
                let ordinal = ordinals.get(&family).copied().unwrap_or(0);
                regions.insert((family, ordinal), collected);
            }
        }
        CustomRegions { regions }
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Reinject saved regions into a fresh skeleton.
    ///
    /// Marker lines come from the skeleton, so a change of comment syntax or
    /// indentation between runs does not disturb preserved content.
    pub fn merge_into(&self, skeleton: &[String]) -> Vec<String> {
        let mut out = Vec::with_capacity(skeleton.len());
        let mut ordinals: HashMap<RegionFamily, usize> = HashMap::new();
        let mut skip_until: Option<RegionFamily> = None;
        for line in skeleton {
            match marker_on_line(line) {
                Some((family, MarkerEdge::Begin)) if skip_until.is_none() => {
                    out.push(line.clone());
                    let ordinal = ordinals.entry(family).or_insert(0);
                    if let Some(saved) = self.regions.get(&(family, *ordinal)) {
                        out.extend(saved.iter().cloned());
                    }
                    *ordinal += 1;
                    skip_until = Some(family);
                }
                Some((family, MarkerEdge::End)) if skip_until == Some(family) => {
                    out.push(line.clone());
                    skip_until = None;
                }
                _ if skip_until.is_some() => {
                    // Placeholder content inside the skeleton's own region is
                    // superseded by the preserved lines.
                }
                _ => out.push(line.clone()),
            }
        }
        out
    }

    /// Serialize to side-file form: bare marker tags around each region.
    /// Parses back through [`CustomRegions::extract`].
    ///
    /// Empty ordinals below the highest populated one are written as empty
    /// pairs so re-extraction assigns the same ordinals.
    pub fn to_side_file(&self) -> String {
        let mut lines = Vec::new();
        for family in [RegionFamily::Imports, RegionFamily::Body] {
            let max = self
                .regions
                .keys()
                .filter(|(f, _)| *f == family)
                .map(|(_, ordinal)| *ordinal)
                .max();
            let Some(max) = max else { continue };
            for ordinal in 0..=max {
                lines.push(family.begin_tag().to_string());
                if let Some(saved) = self.regions.get(&(family, ordinal)) {
                    lines.extend(saved.iter().cloned());
                }
                lines.push(family.end_tag().to_string());
            }
        }
        let mut content = lines.join("\n");
        content.push('\n');
        content
    }
}

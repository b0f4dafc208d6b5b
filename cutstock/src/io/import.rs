use crate::entities::{BarJob, BarStock, Job, LinearPart, PanelJob, PanelStock, Part, PartMeta};
use crate::error::InvalidJob;
use crate::io::ext_repr::{ExtJob, ExtPart, ExtStock};
use crate::packing::Heuristic;
use log::debug;

/// Upper bound on the number of parts in a job after expanding quantities
pub const MAX_PARTS: u64 = 1_000_000;

/// Validates an external job and converts it into the engine's representation.
/// Parts with a quantity are expanded into consecutive copies sharing the same id.
pub fn import(ext_job: &ExtJob) -> Result<Job, InvalidJob> {
    let heuristic = match &ext_job.heuristic {
        None => Heuristic::default(),
        Some(name) => name
            .parse::<Heuristic>()
            .map_err(InvalidJob::UnknownHeuristic)?,
    };

    if ext_job.kerf < 0 {
        return Err(InvalidJob::NegativeKerf(ext_job.kerf));
    }
    let kerf = millimetres(ext_job.kerf, "kerf")?;

    let job = match ext_job.stock_kind.trim().to_ascii_lowercase().as_str() {
        "panel" => {
            let ExtStock::Panel { bw, bh } = ext_job.stock else {
                return Err(stock_mismatch(ext_job));
            };
            let stock = PanelStock::new(
                stock_dimension(bw, "width", kerf)?,
                stock_dimension(bh, "height", kerf)?,
            );
            let parts = expand(&ext_job.parts, |ext_part| {
                let h = ext_part
                    .h
                    .ok_or(InvalidJob::MissingPartHeight { id: ext_part.id })?;
                Ok(Part {
                    id: ext_part.id,
                    w: part_dimension(ext_part.id, ext_part.w, "width")?,
                    h: part_dimension(ext_part.id, h, "height")?,
                    meta: import_meta(ext_part)?,
                })
            })?;
            Job::Panel(PanelJob {
                stock,
                parts,
                heuristic,
                allow_rotation: ext_job.allow_rotation,
                kerf,
            })
        }
        "bar" => {
            let ExtStock::Bar { bar_length } = ext_job.stock else {
                return Err(stock_mismatch(ext_job));
            };
            if bar_length <= 0 {
                return Err(InvalidJob::NonPositiveBarLength(bar_length));
            }
            let stock = BarStock::new(stock_dimension(bar_length, "length", kerf)?);
            let parts = expand(&ext_job.parts, |ext_part| {
                Ok(LinearPart {
                    id: ext_part.id,
                    length: part_dimension(ext_part.id, ext_part.w, "length")?,
                    meta: import_meta(ext_part)?,
                })
            })?;
            Job::Bar(BarJob { stock, parts, kerf })
        }
        _ => return Err(InvalidJob::UnknownStockKind(ext_job.stock_kind.clone())),
    };

    debug!(
        "[IMPORT] {} job with {} part(s) accepted",
        ext_job.stock_kind,
        job.n_parts()
    );
    Ok(job)
}

/// Converts every external part and repeats it according to its quantity.
fn expand<T: Clone>(
    ext_parts: &[ExtPart],
    convert: impl Fn(&ExtPart) -> Result<T, InvalidJob>,
) -> Result<Vec<T>, InvalidJob> {
    if ext_parts.is_empty() {
        return Err(InvalidJob::NoParts);
    }

    let mut total = 0u64;
    let mut parts = vec![];
    for ext_part in ext_parts {
        let qty = ext_part.qty.unwrap_or(1);
        if qty == 0 {
            return Err(InvalidJob::ZeroQuantity { id: ext_part.id });
        }
        total = total.saturating_add(qty);
        if total > MAX_PARTS {
            return Err(InvalidJob::OutOfRange {
                what: "total part quantity".into(),
                value: i64::try_from(total).unwrap_or(i64::MAX),
            });
        }
        let part = convert(ext_part)?;
        parts.extend(std::iter::repeat_n(part, qty as usize));
    }
    Ok(parts)
}

fn import_meta(ext_part: &ExtPart) -> Result<PartMeta, InvalidJob> {
    let thickness = ext_part
        .thickness
        .map(|t| part_dimension(ext_part.id, t, "thickness"))
        .transpose()?;
    Ok(PartMeta {
        thickness,
        material: ext_part.material.clone(),
    })
}

fn stock_dimension(value: i64, axis: &'static str, kerf: u32) -> Result<u32, InvalidJob> {
    if value <= 0 {
        return Err(InvalidJob::NonPositiveStock { axis, value });
    }
    let mm = millimetres(value, &format!("stock {axis}"))?;
    // placements are inflated by the kerf, the inflated extent must stay representable
    match mm.checked_add(kerf) {
        Some(_) => Ok(mm),
        None => Err(InvalidJob::OutOfRange {
            what: format!("stock {axis} plus kerf"),
            value,
        }),
    }
}

fn part_dimension(id: u64, value: i64, axis: &'static str) -> Result<u32, InvalidJob> {
    if value <= 0 {
        return Err(InvalidJob::NonPositivePart { id, axis, value });
    }
    millimetres(value, &format!("part {id} {axis}"))
}

fn millimetres(value: i64, what: &str) -> Result<u32, InvalidJob> {
    u32::try_from(value).map_err(|_| InvalidJob::OutOfRange {
        what: what.to_string(),
        value,
    })
}

fn stock_mismatch(ext_job: &ExtJob) -> InvalidJob {
    InvalidJob::StockMismatch {
        kind: ext_job.stock_kind.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn ext_part(id: u64, w: i64, h: Option<i64>) -> ExtPart {
        ExtPart {
            id,
            w,
            h,
            thickness: None,
            material: None,
            qty: None,
        }
    }

    fn panel_job(parts: Vec<ExtPart>) -> ExtJob {
        ExtJob {
            stock_kind: "panel".into(),
            stock: ExtStock::Panel { bw: 100, bh: 100 },
            parts,
            heuristic: Some("baf".into()),
            allow_rotation: true,
            kerf: 3,
        }
    }

    #[test]
    fn panel_job_is_imported() {
        let mut part = ext_part(4, 20, Some(10));
        part.qty = Some(3);
        part.material = Some("oak".into());
        part.thickness = Some(18);

        let Job::Panel(job) = import(&panel_job(vec![part, ext_part(5, 1, Some(1))])).unwrap()
        else {
            panic!("expected a panel job");
        };
        assert_eq!(job.stock, PanelStock::new(100, 100));
        assert_eq!(job.heuristic, Heuristic::BestAreaFit);
        assert_eq!(job.kerf, 3);
        assert!(job.allow_rotation);
        assert_eq!(
            job.parts.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![4, 4, 4, 5]
        );
        assert_eq!(job.parts[2].meta.material.as_deref(), Some("oak"));
        assert_eq!(job.parts[2].meta.thickness, Some(18));
    }

    #[test]
    fn bar_job_is_imported() {
        let ext_job = ExtJob {
            stock_kind: "Bar".into(),
            stock: ExtStock::Bar { bar_length: 6000 },
            parts: vec![ext_part(1, 2500, None), ext_part(2, 1000, Some(40))],
            heuristic: None,
            allow_rotation: false,
            kerf: 0,
        };
        let Job::Bar(job) = import(&ext_job).unwrap() else {
            panic!("expected a bar job");
        };
        assert_eq!(job.stock, BarStock::new(6000));
        assert_eq!(
            job.parts.iter().map(|p| p.length).collect::<Vec<_>>(),
            vec![2500, 1000]
        );
    }

    #[test]
    fn missing_heuristic_defaults_to_bssf() {
        let mut ext_job = panel_job(vec![ext_part(1, 10, Some(10))]);
        ext_job.heuristic = None;
        let Job::Panel(job) = import(&ext_job).unwrap() else {
            panic!("expected a panel job");
        };
        assert_eq!(job.heuristic, Heuristic::BestShortSideFit);
    }

    #[test_case(|j| j.parts.clear(), InvalidJob::NoParts; "no parts")]
    #[test_case(|j| j.kerf = -1, InvalidJob::NegativeKerf(-1); "negative kerf")]
    #[test_case(|j| j.heuristic = Some("skyline".into()), InvalidJob::UnknownHeuristic("skyline".into()); "unknown heuristic")]
    #[test_case(|j| j.stock_kind = "sheet".into(), InvalidJob::UnknownStockKind("sheet".into()); "unknown stock kind")]
    #[test_case(|j| j.stock = ExtStock::Bar { bar_length: 10 }, InvalidJob::StockMismatch { kind: "panel".into() }; "stock mismatch")]
    #[test_case(|j| j.stock = ExtStock::Panel { bw: 0, bh: 10 }, InvalidJob::NonPositiveStock { axis: "width", value: 0 }; "zero stock width")]
    #[test_case(|j| j.stock = ExtStock::Panel { bw: 10, bh: -5 }, InvalidJob::NonPositiveStock { axis: "height", value: -5 }; "negative stock height")]
    #[test_case(|j| j.parts[0].w = 0, InvalidJob::NonPositivePart { id: 1, axis: "width", value: 0 }; "zero part width")]
    #[test_case(|j| j.parts[0].h = Some(-2), InvalidJob::NonPositivePart { id: 1, axis: "height", value: -2 }; "negative part height")]
    #[test_case(|j| j.parts[0].h = None, InvalidJob::MissingPartHeight { id: 1 }; "missing part height")]
    #[test_case(|j| j.parts[0].qty = Some(0), InvalidJob::ZeroQuantity { id: 1 }; "zero quantity")]
    #[test_case(|j| j.parts[0].thickness = Some(0), InvalidJob::NonPositivePart { id: 1, axis: "thickness", value: 0 }; "zero thickness")]
    fn invalid_panel_jobs_are_rejected(modify: fn(&mut ExtJob), expected: InvalidJob) {
        let mut ext_job = panel_job(vec![ext_part(1, 10, Some(10))]);
        modify(&mut ext_job);
        assert_eq!(import(&ext_job), Err(expected));
    }

    #[test]
    fn non_positive_bar_length_is_rejected() {
        let ext_job = ExtJob {
            stock_kind: "bar".into(),
            stock: ExtStock::Bar { bar_length: 0 },
            parts: vec![ext_part(1, 10, None)],
            heuristic: None,
            allow_rotation: false,
            kerf: 0,
        };
        assert_eq!(import(&ext_job), Err(InvalidJob::NonPositiveBarLength(0)));
    }

    #[test]
    fn oversized_values_are_out_of_range() {
        let mut ext_job = panel_job(vec![ext_part(1, 10, Some(10))]);
        ext_job.stock = ExtStock::Panel {
            bw: u32::MAX as i64,
            bh: 10,
        };
        assert!(matches!(
            import(&ext_job),
            Err(InvalidJob::OutOfRange { .. })
        ));
    }
}

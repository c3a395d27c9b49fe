use modinfo_registry::{ModInfo, ModRegistry, ModStatus};

pub fn list(registry: &ModRegistry, status: Option<ModStatus>, server: Option<&str>) -> String {
    registry
        .iter()
        .filter(|m| status.map_or(true, |s| m.status == s))
        .filter(|m| server.map_or(true, |s| m.applies_to(s)))
        .map(list_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn list_line(info: &ModInfo) -> String {
    match &info.version {
        Some(version) => format!("{}\t{}\t{}", info.status, info.name, version),
        None => format!("{}\t{}", info.status, info.name),
    }
}

pub fn show(registry: &ModRegistry, name: &str) -> anyhow::Result<String> {
    let Some(info) = registry.find(name) else {
        anyhow::bail!("no mod named '{}'", name);
    };
    Ok(serde_json::to_string_pretty(info)?)
}

pub fn stats(registry: &ModRegistry) -> String {
    let mut lines: Vec<String> = registry
        .status_counts()
        .iter()
        .map(|(status, count)| format!("{}\t{}", status, count))
        .collect();
    lines.push(format!("total\t{}", registry.len()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ModRegistry {
        modinfo_registry::load_from_str(
            r#"[
                {"name": "Sodium", "status": "allowed", "version": "0.5.8"},
                {"name": "Minimap", "status": "partially_allowed", "server": ["Survival"]},
                {"name": "Freecam", "status": "disallowed"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_list_all() {
        assert_eq!(
            list(&sample(), None, None),
            "allowed\tSodium\t0.5.8\npartially_allowed\tMinimap\ndisallowed\tFreecam"
        );
    }

    #[test]
    fn test_list_filters() {
        let registry = sample();
        assert_eq!(
            list(&registry, Some(ModStatus::Disallowed), None),
            "disallowed\tFreecam"
        );
        assert_eq!(
            list(&registry, None, Some("Creative")),
            "allowed\tSodium\t0.5.8\ndisallowed\tFreecam"
        );
        assert_eq!(list(&registry, Some(ModStatus::Unknown), None), "");
    }

    #[test]
    fn test_show() {
        let registry = sample();
        let json = show(&registry, "Minimap").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Minimap", "status": "partially_allowed", "server": ["Survival"]})
        );
        assert!(show(&registry, "minimap").is_err());
    }

    #[test]
    fn test_stats() {
        assert_eq!(
            stats(&sample()),
            "allowed\t1\ndisallowed\t1\npartially_allowed\t1\nunknown\t0\ntotal\t3"
        );
    }
}

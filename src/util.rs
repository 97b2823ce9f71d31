/// Derive a URL-safe tenant label from a display name: lowercased ASCII
/// alphanumerics with single dashes between word runs.
pub fn slugify(name: &str) -> String {
	let mut slug = String::with_capacity(name.len());
	for c in name.to_lowercase().chars() {
		if c.is_ascii_alphanumeric() {
			slug.push(c);
		} else if !slug.is_empty() && !slug.ends_with('-') {
			slug.push('-');
		}
	}
	slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn slugify_names() {
		assert_eq!(slugify("Acme Corp"), "acme-corp");
		assert_eq!(slugify("  Globex -- Intl.  "), "globex-intl");
		assert_eq!(slugify("Initech 2000"), "initech-2000");
		assert_eq!(slugify("***"), "");
	}
}

/*! CoNLL-U import

Converts the output of an external Universal Dependencies parser into a [TokenTable].

- documents are delimited by `# newdoc id = …` (or `# doc_id = …`) comments.
  A bare `# newdoc` opens an anonymous document named `doc<n>`.
- sentence ids are renumbered from 1 within each document.
- multiword token ranges (`1-2`) and empty nodes (`1.1`) are skipped.

CoNLL-U format: https://universaldependencies.org/format.html
!*/
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use crate::error::Error;
use crate::tokens::{TokenRecord, TokenTable};

/// Document id carried by a comment line, if any.
///
/// Returns `Some(None)` for an anonymous `# newdoc`.
fn doc_comment(comment: &str) -> Option<Option<String>> {
    let comment = comment.trim();
    if comment == "newdoc" {
        return Some(None);
    }

    let (key, value) = comment.split_once('=')?;
    match key.trim() {
        "newdoc id" | "doc_id" => Some(Some(value.trim().to_string())),
        _ => None,
    }
}

fn parse_number(value: &str, what: &str, line_num: usize) -> Result<u32, Error> {
    value
        .parse::<u32>()
        .map_err(|_| Error::Schema(format!("line {line_num}: invalid {what} {value:?}")))
}

/// Parse a CoNLL-U document.
pub fn parse_conllu(text: &str) -> Result<TokenTable, Error> {
    let mut records = Vec::new();

    let mut anonymous = 0;
    let mut doc_id: Option<String> = None;
    let mut sentence_id = 0;
    let mut in_sentence = false;

    for (idx, line) in text.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            in_sentence = false;
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            if let Some(new_doc) = doc_comment(comment) {
                let id = new_doc.unwrap_or_else(|| {
                    anonymous += 1;
                    format!("doc{anonymous}")
                });
                debug!("new document {id}");
                doc_id = Some(id);
                sentence_id = 0;
            }
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 10 {
            return Err(Error::Schema(format!(
                "line {line_num}: expected 10 fields, found {}",
                fields.len()
            )));
        }

        // multiword tokens and empty nodes
        if fields[0].contains('-') || fields[0].contains('.') {
            continue;
        }

        if !in_sentence {
            in_sentence = true;
            sentence_id += 1;
        }

        let doc = match &doc_id {
            Some(id) => id.clone(),
            None => {
                anonymous += 1;
                let id = format!("doc{anonymous}");
                doc_id = Some(id.clone());
                id
            }
        };

        let head = match fields[6] {
            "_" => 0,
            h => parse_number(h, "head", line_num)?,
        };

        records.push(TokenRecord {
            doc_id: doc,
            sentence_id,
            token_id: parse_number(fields[0], "token id", line_num)?,
            token: fields[1].to_string(),
            lemma: fields[2].to_string(),
            upos: fields[3].to_string(),
            xpos: fields[4].to_string(),
            head_token_id: head,
            dep_rel: fields[7].to_string(),
        });
    }

    let table = TokenTable::new(records);
    table.validate()?;
    Ok(table)
}

/// Read a CoNLL-U file (gzipped if its name ends in `.gz`).
pub fn read_conllu(path: &Path) -> Result<TokenTable, Error> {
    info!("importing CoNLL-U file {:?}", path);
    let mut text = String::new();
    crate::io::open(path)?.read_to_string(&mut text)?;
    parse_conllu(&text)
}

#[cfg(test)]
mod tests {
    use super::parse_conllu;

    const SAMPLE: &str = "# newdoc id = blog3
# sent_id = 1
# text = 祝你一天过得愉快.
1\t祝\t祝\tVERB\tVV\t_\t0\troot\t_\t_
2\t你\t你\tPRON\tPN\t_\t1\tobj\t_\t_
3\t一天\t一天\tNOUN\tNN\t_\t4\tobl:tmod\t_\t_
4\t过得\t过得\tVERB\tVV\t_\t1\txcomp\t_\t_
5\t愉快\t愉快\tADJ\tVA\t_\t4\tccomp\t_\t_
6\t.\t.\tPUNCT\t.\t_\t1\tpunct\t_\t_

# sent_id = 2
1-2\t不是\t_\t_\t_\t_\t_\t_\t_\t_
1\t不\t不\tADV\tAD\t_\t2\tadvmod\t_\t_
2\t是\t是\tVERB\tVC\t_\t0\troot\t_\t_
2.1\t了\t了\tPART\tAS\t_\t_\t_\t_\t_

# newdoc id = news1
1\t好\t好\tADJ\tVA\t_\t0\troot\t_\t_
";

    #[test]
    fn documents_and_sentences() {
        let table = parse_conllu(SAMPLE).unwrap();

        assert_eq!(table.doc_ids(), vec!["blog3", "news1"]);
        assert_eq!(table.len(), 9);
        assert_eq!(
            table.concatenated_forms("blog3"),
            Some("祝你一天过得愉快.不是".to_string())
        );

        let last = table.records().last().unwrap();
        assert_eq!(last.doc_id, "news1");
        assert_eq!(last.sentence_id, 1);

        let shi = &table.records()[7];
        assert_eq!(shi.sentence_id, 2);
        assert_eq!(shi.token_id, 2);
    }

    #[test]
    fn anonymous_documents() {
        let text = "1\ta\ta\tX\t_\t_\t0\troot\t_\t_\n\n# newdoc\n1\tb\tb\tX\t_\t_\t0\troot\t_\t_\n";
        let table = parse_conllu(text).unwrap();
        assert_eq!(table.doc_ids(), vec!["doc1", "doc2"]);
    }

    #[test]
    fn wrong_field_count() {
        assert!(parse_conllu("1\ta\ta\n").is_err());
    }
}

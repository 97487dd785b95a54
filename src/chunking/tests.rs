use super::*;

fn cleaner() -> TextCleaner {
    TextCleaner::new().expect("cleaner regexes compile")
}

fn classifier() -> BlockClassifier {
    BlockClassifier::new().expect("classifier regexes compile")
}

fn chunker(config: ChunkingConfig) -> SemanticChunker {
    SemanticChunker::new(config).expect("chunker regexes compile")
}

fn assert_contiguous_indices(chunks: &[Chunk]) {
    for (expected, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.metadata.chunk_index, expected);
    }
}

#[test]
fn quick_clean_unifies_line_endings_and_collapses_runs() {
    let cleaned = cleaner().quick_clean("alpha\r\nbeta\rgamma   delta\n\n\n\n\n\nend");
    assert_eq!(cleaned, "alpha\nbeta\ngamma delta\n\n\nend");
}

#[test]
fn quick_clean_rejoins_hyphenated_line_wraps() {
    assert_eq!(cleaner().quick_clean("soft-\nware unit"), "software unit");
}

#[test]
fn quick_clean_spaces_camel_case_boundaries() {
    assert_eq!(cleaner().quick_clean("endedStarted new run"), "ended Started new run");
}

#[test]
fn quick_clean_converts_form_feeds_and_strips_invisible_chars() {
    let cleaned = cleaner().quick_clean("one\u{200B}\u{00AD}\u{000C}two");
    assert_eq!(cleaned, "one\n\ntwo");
}

#[test]
fn clean_removes_page_number_lines() {
    let cleaned = cleaner().clean(
        "intro paragraph\n3\nPage 4 of 10\nclosing paragraph",
        &CleanOptions::default(),
    );
    assert_eq!(cleaned, "intro paragraph\nclosing paragraph");
}

#[test]
fn quick_clean_keeps_page_number_lines() {
    let cleaned = cleaner().quick_clean("intro paragraph\n42\nclosing paragraph");
    assert!(cleaned.contains("42"));
}

#[test]
fn clean_removes_standalone_link_and_email_lines() {
    let cleaned = cleaner().clean(
        "see the details\nhttps://example.com/profile\njane@example.com\nfinal words",
        &CleanOptions::default(),
    );
    assert_eq!(cleaned, "see the details\nfinal words");
}

#[test]
fn clean_removes_lines_repeated_more_than_twice() {
    let header = "Acme Résumé Service export";
    let text = format!(
        "{header}\nfirst body paragraph\n{header}\nsecond body paragraph\n{header}\nthird body paragraph"
    );
    let cleaned = cleaner().clean(&text, &CleanOptions::default());

    assert!(!cleaned.contains(header));
    assert!(cleaned.contains("first body paragraph"));
    assert!(cleaned.contains("third body paragraph"));
}

#[test]
fn clean_normalizes_bullet_and_numbered_markers() {
    let cleaned = cleaner().clean(
        "- first thing\n* second thing\n\u{2023} third thing\n1) step one\n2. step two",
        &CleanOptions::default(),
    );
    assert_eq!(
        cleaned,
        "\u{2022} first thing\n\u{2022} second thing\n\u{2022} third thing\n1. step one\n2. step two"
    );
}

#[test]
fn clean_fixes_ocr_confusables_only_when_opted_in() {
    let options = CleanOptions {
        remove_page_numbers: false,
        remove_links: false,
        remove_repeated_lines: false,
        fix_ocr: true,
    };
    assert_eq!(cleaner().clean("he1lo w0rd l am", &options), "hello word I am");

    let untouched = cleaner().clean("he1lo w0rd l am", &CleanOptions::default());
    assert_eq!(untouched, "he1lo w0rd l am");
}

#[test]
fn clean_is_idempotent_on_noisy_text() {
    let noisy = "EXPERIENCE\n\nWorked on soft-\nware systems.\n\n- built things\n- shipped things\n\n3";
    let once = cleaner().clean(noisy, &CleanOptions::default());
    let twice = cleaner().clean(&once, &CleanOptions::default());
    assert_eq!(once, twice);
    assert!(once.contains("software systems."));
    assert!(once.contains("\u{2022} built things"));
}

#[test]
fn classify_detects_pipe_delimited_table() {
    let (kind, confidence) =
        classifier().classify("Name|Age\n---|---\nAlice|30\nBob|25\nCarol|22");
    assert_eq!(kind, BlockKind::Table);
    assert!(confidence > 0.4);
}

#[test]
fn classify_detects_section_keyword_heading() {
    let (kind, confidence) = classifier().classify("EXPERIENCE");
    assert_eq!(kind, BlockKind::Heading);
    assert!(confidence > 0.7);

    assert!(classifier().heading_score("Professional Summary") > 0.4);
}

#[test]
fn classify_rejects_ordinary_sentence_as_heading() {
    let (kind, confidence) =
        classifier().classify("this line reads like an ordinary prose sentence.");
    assert_eq!(kind, BlockKind::Text);
    assert_eq!(confidence, 1.0);
}

#[test]
fn classify_detects_bullet_and_numbered_lists() {
    let (kind, confidence) =
        classifier().classify("\u{2022} first item here\n\u{2022} second item here\n\u{2022} third item here");
    assert_eq!(kind, BlockKind::List);
    assert!(confidence > 0.35);

    let (kind, confidence) = classifier().classify("1. first step\n2. second step\n3. third step");
    assert_eq!(kind, BlockKind::List);
    assert!(confidence > 0.35);
}

#[test]
fn classify_marks_header_footer_noise_with_zero_confidence() {
    let classifier = classifier();
    for noise in ["Page 3 of 10", "7", "\u{00A9} 2024 Acme Corp", "https://example.com"] {
        let (kind, confidence) = classifier.classify(noise);
        assert_eq!(kind, BlockKind::Text, "noise span: {noise}");
        assert_eq!(confidence, 0.0, "noise span: {noise}");
    }
}

#[test]
fn segment_drops_noise_blocks_and_keeps_disjoint_line_ranges() {
    let blocks = classifier().segment_into_blocks(
        "SKILLS\n\nRust and systems programming experience\nacross several teams.\n\nPage 2 of 2",
    );

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].kind, BlockKind::Heading);
    assert_eq!(blocks[0].start_line, 0);
    assert_eq!(blocks[1].kind, BlockKind::Text);
    assert!(blocks[1].start_line > blocks[0].end_line);
    assert!(blocks[1].end_line >= blocks[1].start_line);
}

#[test]
fn segment_of_blank_input_is_empty() {
    assert!(classifier().segment_into_blocks("").is_empty());
    assert!(classifier().segment_into_blocks("\n\n   \n\n").is_empty());
}

#[test]
fn chunk_document_splits_long_prose_into_two_bounded_chunks() {
    let text = "A. B. C. D. ".repeat(125);
    let chunks = chunker(ChunkingConfig::default()).chunk_document(&text, None);

    assert_eq!(chunks.len(), 2);
    assert_contiguous_indices(&chunks);
    assert!(chunks[0].content.chars().count() <= 1000);
    assert!(chunks[1].metadata.original_length >= 100);
    assert!(chunks[1].metadata.has_overlap);
    assert!(
        chunks[1].content.chars().count()
            <= 1000 + chunks[0].metadata.original_length.min(200) + 2
    );
}

#[test]
fn chunk_document_emits_small_table_as_single_chunk() {
    let table = "Name|Age\n---|---\nAlice|30\nBob|25\nCarol|22";
    let chunks = chunker(ChunkingConfig::default()).chunk_document(table, None);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].metadata.content_type, BlockKind::Table);
    assert!(!chunks[0].metadata.has_overlap);
    assert_eq!(chunks[0].metadata.chunk_index, 0);
}

#[test]
fn chunk_document_reseeds_table_header_on_every_split() {
    let mut table = String::from("Name|Age\n---|---");
    for row in 0..30 {
        table.push_str(&format!("\nrow{row:02}|{}", 20 + row));
    }

    let config = ChunkingConfig {
        max_chunk_size: 80,
        overlap_size: 0,
        table_max_size: 120,
        min_chunk_size: 10,
    };
    let chunks = chunker(config).chunk_document(&table, None);

    assert!(chunks.len() >= 2);
    assert_contiguous_indices(&chunks);
    for chunk in &chunks {
        assert!(chunk.content.starts_with("Name|Age\n---|---"), "{}", chunk.content);
        assert!(chunk.content.chars().count() <= 120);
        assert_eq!(chunk.metadata.content_type, BlockKind::Table);
        assert_eq!(chunk.metadata.confidence, ConfidenceLevel::High);
    }
}

#[test]
fn chunk_document_never_splits_a_list_item_mid_line() {
    let list = (0..10)
        .map(|item| format!("- item number {item:02} with words"))
        .collect::<Vec<String>>()
        .join("\n");

    let config = ChunkingConfig {
        max_chunk_size: 60,
        overlap_size: 0,
        table_max_size: 2000,
        min_chunk_size: 10,
    };
    let chunks = chunker(config).chunk_document(&list, None);

    assert!(chunks.len() >= 2);
    for chunk in &chunks {
        assert!(chunk.content.chars().count() <= 60);
        assert_eq!(chunk.metadata.content_type, BlockKind::List);
        for line in chunk.content.lines() {
            assert!(line.starts_with("\u{2022} "), "split mid-item: {line}");
        }
    }
}

#[test]
fn chunk_document_merges_small_final_fragment_into_previous_chunk() {
    let text = format!("{}. tiny tail.", "a".repeat(994));
    let chunks = chunker(ChunkingConfig::default()).chunk_document(&text, None);

    assert_eq!(chunks.len(), 1);
    assert!(chunks[0].content.ends_with("tiny tail."));
    assert_eq!(chunks[0].metadata.original_length, 1006);
}

#[test]
fn chunk_document_stamps_page_number_on_every_chunk() {
    let text = "A. B. C. D. ".repeat(125);
    let chunks = chunker(ChunkingConfig::default()).chunk_document(&text, Some(7));

    assert!(chunks.len() > 1);
    assert!(chunks.iter().all(|chunk| chunk.metadata.page_number == Some(7)));
}

#[test]
fn chunk_document_skips_overlap_when_next_chunk_already_starts_with_it() {
    // 62 identical 31-char sentences split into two 31-sentence chunks of
    // 991 chars. An overlap of 191 chars starts exactly on a sentence
    // boundary, so the second chunk already begins with the overlap text.
    let text = vec!["The same sentence repeats here."; 62].join(" ");
    let config = ChunkingConfig {
        max_chunk_size: 1000,
        overlap_size: 191,
        table_max_size: 2000,
        min_chunk_size: 100,
    };
    let chunks = chunker(config).chunk_document(&text, None);

    assert_eq!(chunks.len(), 2);
    assert!(!chunks[1].metadata.has_overlap);
    assert!(chunks[1].content.starts_with("The same sentence repeats here."));
    assert_eq!(chunks[1].content.chars().count(), chunks[1].metadata.original_length);
}

#[test]
fn chunk_document_drops_undersized_chunks_and_renumbers() {
    let prose = (1..=10)
        .map(|index| format!("this is sentence {index:02}."))
        .collect::<Vec<String>>()
        .join(" ");
    let text = format!("{prose}\n\nOk.");

    let config = ChunkingConfig {
        max_chunk_size: 50,
        overlap_size: 0,
        table_max_size: 2000,
        min_chunk_size: 20,
    };
    let chunks = chunker(config).chunk_document(&text, None);

    assert!(chunks.len() > 1);
    assert_contiguous_indices(&chunks);
    assert!(chunks.iter().all(|chunk| chunk.content.trim().chars().count() >= 20));
    assert!(chunks.iter().all(|chunk| chunk.content != "Ok."));
}

#[test]
fn chunk_document_of_empty_input_is_empty() {
    let chunker = chunker(ChunkingConfig::default());
    assert!(chunker.chunk_document("", None).is_empty());
    assert!(chunker.chunk_document("   \n\n \u{000C} \n", None).is_empty());
}

#[test]
fn chunk_pages_renumbers_chunks_globally() {
    let pages = vec![
        PageInput {
            text: "X".to_string(),
            page_number: 1,
        },
        PageInput {
            text: "Y".to_string(),
            page_number: 2,
        },
    ];
    let chunks = chunker(ChunkingConfig::default()).chunk_pages(&pages);

    assert_eq!(chunks.len(), 2);
    assert_contiguous_indices(&chunks);
    assert_eq!(chunks[0].metadata.page_number, Some(1));
    assert_eq!(chunks[1].metadata.page_number, Some(2));
}

#[test]
fn split_text_keeps_lone_fragment_with_low_confidence() {
    let splitter = BlockSplitter::new().expect("splitter regexes compile");
    let pieces = splitter.split_text("short bit", 1.0, 1000, 100);

    assert_eq!(pieces.len(), 1);
    assert_eq!(pieces[0].content, "short bit");
    assert_eq!(pieces[0].confidence, ConfidenceLevel::Low);
}

#[test]
fn split_table_of_header_only_block_emits_header_chunk() {
    let splitter = BlockSplitter::new().expect("splitter regexes compile");
    let pieces = splitter.split_table("Name|Age", 50);

    assert_eq!(pieces.len(), 1);
    assert_eq!(pieces[0].content, "Name|Age");
}

#[test]
fn chunking_stats_zeroes_out_on_empty_input() {
    let stats = chunking_stats(&[]);
    assert_eq!(stats.total_chunks, 0);
    assert_eq!(stats.average_chunk_size, 0.0);
    assert!(stats.chunks_by_type.is_empty());
    assert!(stats.chunks_by_confidence.is_empty());
}

#[test]
fn chunking_stats_aggregates_types_and_confidence() {
    let table = "Name|Age\n---|---\nAlice|30\nBob|25\nCarol|22";
    let chunks = chunker(ChunkingConfig::default()).chunk_document(table, None);
    let stats = chunking_stats(&chunks);

    assert_eq!(stats.total_chunks, 1);
    assert_eq!(stats.chunks_by_type.get("table"), Some(&1));
    assert_eq!(stats.chunks_by_confidence.get("medium"), Some(&1));
    assert_eq!(stats.min_chunk_size, stats.max_chunk_size);
    assert!(stats.average_chunk_size > 0.0);
}

//! Embedded stylesheet for the HTML cheatsheet
//!
//! Print rules (`@page`, page breaks, two-column contents) mirror the
//! layout the PDF backend produces.

/// CSS embedded in the `<style>` block of the HTML document
pub const STYLESHEET: &str = r#"
@page {
    size: A4;
    margin: 0.75in;

    @bottom-center {
        content: "Page " counter(page) " of " counter(pages);
        font-size: 9pt;
        color: #4A5568;
    }
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: 'Segoe UI', Arial, sans-serif;
    font-size: 11pt;
    line-height: 1.6;
    color: #1A202C;
    background: #FFFFFF;
}

.header {
    text-align: center;
    padding: 20px 0 30px 0;
    border-bottom: 3px solid #2C5282;
    margin-bottom: 30px;
}

.header h1 {
    font-size: 28pt;
    color: #2C5282;
    margin-bottom: 10px;
    font-weight: 700;
    border-top: none;
    page-break-before: auto;
}

.header .version {
    font-size: 12pt;
    color: #4A5568;
    margin-bottom: 8px;
}

.header .description {
    font-size: 11pt;
    font-style: italic;
}

.toc {
    background: #F7FAFC;
    padding: 20px;
    border-radius: 8px;
    margin-bottom: 30px;
    border: 1px solid #E2E8F0;
}

.toc h2 {
    font-size: 16pt;
    color: #2C5282;
    margin-bottom: 15px;
}

.toc ul {
    list-style: none;
    columns: 2;
    column-gap: 30px;
}

.toc li {
    margin-bottom: 8px;
    break-inside: avoid;
}

.toc a {
    color: #3182CE;
    text-decoration: none;
    font-weight: 500;
}

h1 {
    font-size: 24pt;
    color: #2C5282;
    margin-top: 40px;
    margin-bottom: 20px;
    padding-top: 20px;
    border-top: 2px solid #E2E8F0;
    page-break-before: always;
}

h2 {
    font-size: 18pt;
    color: #2C5282;
    margin-top: 30px;
    margin-bottom: 15px;
}

h3 {
    font-size: 14pt;
    color: #4A5568;
    margin-top: 20px;
    margin-bottom: 10px;
}

.phase-section {
    padding: 20px;
    margin-bottom: 25px;
    border-radius: 8px;
    border-left: 4px solid;
    break-inside: avoid;
}

.phase-setup {
    background: #EBF8FF;
    border-left-color: #3182CE;
}

.phase-configuration {
    background: #F7FAFC;
    border-left-color: #4A5568;
}

.phase-daily {
    background: #F0FFF4;
    border-left-color: #38A169;
}

.phase-maintenance {
    background: #FFFAF0;
    border-left-color: #DD6B20;
}

.phase-title {
    font-size: 16pt;
    font-weight: 700;
    color: #2C5282;
    margin-bottom: 8px;
}

.command {
    background: #2D3748;
    color: #E2E8F0;
    padding: 3px 8px;
    border-radius: 4px;
    font-family: 'Consolas', 'Monaco', monospace;
    font-size: 10pt;
    white-space: nowrap;
}

.command-block {
    margin: 15px 0;
    break-inside: avoid;
}

.command-name {
    font-weight: 700;
    font-size: 12pt;
    color: #2C5282;
    margin-bottom: 5px;
}

.command-description {
    margin-bottom: 5px;
}

.agent-block {
    margin: 15px 0;
    padding: 12px;
    background: #F7FAFC;
    border-left: 3px solid #3182CE;
    border-radius: 4px;
    break-inside: avoid;
}

.agent-name {
    font-weight: 700;
    font-size: 11pt;
    color: #2C5282;
    margin-bottom: 5px;
}

table {
    width: 100%;
    border-collapse: collapse;
    margin: 20px 0;
    font-size: 10pt;
}

th {
    background: #2C5282;
    color: white;
    padding: 10px;
    text-align: left;
    font-weight: 600;
}

td {
    padding: 8px 10px;
    border-bottom: 1px solid #E2E8F0;
}

tr:nth-child(even) {
    background: #F7FAFC;
}

.callout {
    padding: 12px 15px;
    margin: 15px 0;
    border-left: 4px solid #3182CE;
    background: #EBF8FF;
    border-radius: 4px;
    break-inside: avoid;
}

.callout-title {
    font-weight: 700;
    color: #2C5282;
    margin-bottom: 5px;
}

pre {
    background: #2D3748;
    color: #E2E8F0;
    padding: 12px;
    border-radius: 4px;
    font-family: 'Consolas', 'Monaco', monospace;
    font-size: 9pt;
    line-height: 1.4;
    margin: 15px 0;
}

.scope-diagram {
    background: #F7FAFC;
    color: #1A202C;
    padding: 20px;
    border: 2px solid #E2E8F0;
    border-radius: 8px;
    font-family: monospace;
    margin: 20px 0;
    white-space: pre;
    line-height: 1.8;
    break-inside: avoid;
}

ul {
    margin: 10px 0;
    padding-left: 25px;
}

li {
    margin-bottom: 5px;
}

p {
    margin-bottom: 10px;
}

strong {
    color: #2C5282;
    font-weight: 600;
}

.footer {
    margin-top: 50px;
    padding-top: 20px;
    border-top: 2px solid #E2E8F0;
    text-align: center;
    color: #4A5568;
    font-size: 9pt;
}
"#;

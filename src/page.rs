//! The single page served at `/`: upload a photo, pick a style, get roasted.

pub(crate) const INDEX_HTML: &str = r#"
<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>🔥 Roast My Friends</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            background: linear-gradient(135deg, #FF6B35 0%, #B02E0C 100%);
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 20px;
        }

        .container {
            background: white;
            border-radius: 20px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.3);
            max-width: 720px;
            width: 100%;
            padding: 40px;
        }

        h1 {
            color: #FF6B35;
            text-align: center;
            margin-bottom: 6px;
            font-size: 2.4em;
        }

        .subtitle {
            color: #666;
            text-align: center;
            margin-bottom: 30px;
            font-size: 1.05em;
        }

        .config {
            background: #fff4ef;
            border: 1px solid #ffd2c2;
            border-radius: 12px;
            padding: 16px;
            margin-bottom: 24px;
        }

        .config.highlight {
            border-color: #FF6B35;
            box-shadow: 0 0 0 3px rgba(255,107,53,0.25);
        }

        .config-label {
            display: block;
            color: #a8431f;
            font-weight: 600;
            font-size: 0.9em;
            margin-bottom: 8px;
        }

        .config input {
            width: 100%;
            padding: 10px 12px;
            border: 1px solid #ffd2c2;
            border-radius: 8px;
            font-size: 0.95em;
        }

        .config-hint {
            color: #999;
            font-size: 0.85em;
            margin-top: 8px;
        }

        .config-hint a {
            color: #FF6B35;
        }

        .field-label {
            display: block;
            color: #333;
            font-weight: 600;
            margin-bottom: 8px;
        }

        select {
            width: 100%;
            padding: 12px;
            border: 2px solid #eee;
            border-radius: 10px;
            font-size: 1em;
            margin-bottom: 24px;
            background: white;
            cursor: pointer;
        }

        .upload-area {
            border: 3px dashed #FF6B35;
            border-radius: 15px;
            padding: 50px 20px;
            text-align: center;
            cursor: pointer;
            transition: all 0.3s;
            background: #fff8f5;
        }

        .upload-area:hover {
            border-color: #B02E0C;
            background: #fff0e8;
        }

        .upload-area.dragover {
            border-color: #B02E0C;
            background: #ffe8dc;
            transform: scale(1.02);
        }

        .upload-icon {
            font-size: 3.5em;
            margin-bottom: 16px;
        }

        .upload-text {
            color: #FF6B35;
            font-size: 1.15em;
            font-weight: 600;
            margin-bottom: 8px;
        }

        .upload-hint {
            color: #999;
            font-size: 0.9em;
        }

        input[type="file"] {
            display: none;
        }

        .preview-image {
            display: none;
            max-width: 100%;
            border-radius: 10px;
            margin-top: 20px;
            box-shadow: 0 4px 15px rgba(0,0,0,0.1);
        }

        .roast-button {
            display: block;
            width: 100%;
            margin-top: 20px;
            padding: 14px;
            border: none;
            border-radius: 10px;
            background: #FF6B35;
            color: white;
            font-size: 1.1em;
            font-weight: 700;
            cursor: pointer;
            transition: background 0.2s;
        }

        .roast-button:hover:enabled {
            background: #B02E0C;
        }

        .roast-button:disabled {
            background: #f0c0ad;
            cursor: not-allowed;
        }

        .loading {
            text-align: center;
            padding: 30px;
            display: none;
            color: #666;
        }

        .spinner {
            border: 4px solid #f3f3f3;
            border-top: 4px solid #FF6B35;
            border-radius: 50%;
            width: 44px;
            height: 44px;
            animation: spin 1s linear infinite;
            margin: 0 auto 16px;
        }

        @keyframes spin {
            0% { transform: rotate(0deg); }
            100% { transform: rotate(360deg); }
        }

        .error {
            background: #fee;
            border: 2px solid #fcc;
            color: #c33;
            padding: 15px;
            border-radius: 10px;
            margin-top: 20px;
            display: none;
        }

        .result {
            background: #fff8f5;
            border: 2px solid #ffd2c2;
            border-radius: 10px;
            padding: 20px;
            margin-top: 20px;
            display: none;
        }

        .result.compliment {
            background: #f2fbf4;
            border-color: #bce5c8;
        }

        .result-label {
            color: #FF6B35;
            font-weight: 600;
            margin-bottom: 10px;
            font-size: 0.9em;
            text-transform: uppercase;
            letter-spacing: 1px;
        }

        .result.compliment .result-label {
            color: #2c9e55;
        }

        .result-text {
            color: #333;
            font-size: 1.1em;
            line-height: 1.6;
        }

        .meta-info {
            display: flex;
            justify-content: space-between;
            margin-top: 15px;
            padding-top: 15px;
            border-top: 1px solid #f0ddd2;
            font-size: 0.85em;
            color: #666;
        }

        .badge {
            display: inline-block;
            background: #FF6B35;
            color: white;
            padding: 3px 10px;
            border-radius: 20px;
            font-size: 0.85em;
            font-weight: 600;
        }

        .actions {
            display: flex;
            gap: 10px;
            margin-top: 15px;
        }

        .actions button {
            flex: 1;
            padding: 10px;
            border: 2px solid #FF6B35;
            border-radius: 10px;
            background: white;
            color: #FF6B35;
            font-weight: 600;
            cursor: pointer;
        }

        .actions button:hover {
            background: #fff0e8;
        }

        .footer {
            margin-top: 36px;
            padding-top: 24px;
            border-top: 2px solid #f5f5f5;
            text-align: center;
            color: #666;
            font-size: 0.9em;
        }

        .footer small {
            color: #999;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>🔥 Roast My Friends</h1>
        <p class="subtitle">L'IA qui va chambrer tes amis avec style !</p>

        <div class="config" id="configPanel">
            <label class="config-label" for="apiKeyInput">⚙️ Clé API Mistral</label>
            <input type="password" id="apiKeyInput" placeholder="Optionnelle si MISTRAL_KEY est configurée côté serveur">
            <p class="config-hint">💡 Pour obtenir une clé, rendez-vous sur <a href="https://console.mistral.ai" target="_blank" rel="noopener">console.mistral.ai</a></p>
        </div>

        <label class="field-label" for="styleSelect">🎯 Type de roast</label>
        <select id="styleSelect">
            <option value="hair">Cheveux</option>
            <option value="style">Style vestimentaire</option>
            <option value="expression">Expression faciale</option>
            <option value="general">Général</option>
            <option value="compliment">Compliment</option>
        </select>

        <div class="upload-area" id="uploadArea">
            <div class="upload-icon">📸</div>
            <div class="upload-text">Clique ou dépose une photo de ton ami(e) ici</div>
            <div class="upload-hint">PNG ou JPEG • 10 Mo max</div>
            <input type="file" id="fileInput" accept="image/png,image/jpeg">
        </div>

        <img id="previewImage" class="preview-image" alt="Image uploadée">

        <button class="roast-button" id="roastButton" disabled>🔥 Générer le roast !</button>

        <div class="loading" id="loading">
            <div class="spinner"></div>
            <p>🤖 L'IA analyse l'image et prépare son roast...</p>
        </div>

        <div class="error" id="error"></div>

        <div class="result" id="result">
            <div class="result-label" id="resultLabel">🎭 Résultat du roast</div>
            <div class="result-text" id="roastText"></div>
            <div class="meta-info">
                <span>Modèle : <span class="badge" id="modelName">pixtral</span></span>
                <span>Temps : <strong id="processingTime">--</strong> ms</span>
            </div>
            <div class="actions">
                <button id="copyButton">📋 Copier le texte</button>
                <button id="resetButton">🔄 Nouveau roast</button>
            </div>
        </div>

        <div class="footer">
            <p>🤖 Alimenté par Mistral AI • 🔥 Fait avec amour et humour</p>
            <p><small>⚠️ À utiliser avec modération et bienveillance !</small></p>
        </div>
    </div>

    <script>
        const uploadArea = document.getElementById('uploadArea');
        const fileInput = document.getElementById('fileInput');
        const styleSelect = document.getElementById('styleSelect');
        const apiKeyInput = document.getElementById('apiKeyInput');
        const configPanel = document.getElementById('configPanel');
        const previewImage = document.getElementById('previewImage');
        const roastButton = document.getElementById('roastButton');
        const loading = document.getElementById('loading');
        const errorDiv = document.getElementById('error');
        const result = document.getElementById('result');
        const resultLabel = document.getElementById('resultLabel');
        const roastText = document.getElementById('roastText');
        const modelName = document.getElementById('modelName');
        const processingTime = document.getElementById('processingTime');
        const copyButton = document.getElementById('copyButton');
        const resetButton = document.getElementById('resetButton');

        let selectedFile = null;

        uploadArea.addEventListener('click', () => fileInput.click());

        uploadArea.addEventListener('dragover', (e) => {
            e.preventDefault();
            uploadArea.classList.add('dragover');
        });

        uploadArea.addEventListener('dragleave', () => {
            uploadArea.classList.remove('dragover');
        });

        uploadArea.addEventListener('drop', (e) => {
            e.preventDefault();
            uploadArea.classList.remove('dragover');
            const file = e.dataTransfer.files[0];
            if (file) {
                selectFile(file);
            }
        });

        fileInput.addEventListener('change', (e) => {
            const file = e.target.files[0];
            if (file) {
                selectFile(file);
            }
        });

        function selectFile(file) {
            if (file.type !== 'image/png' && file.type !== 'image/jpeg') {
                showError("Formats acceptés : PNG et JPEG uniquement.", 'request');
                return;
            }
            selectedFile = file;
            const reader = new FileReader();
            reader.onload = (e) => {
                previewImage.src = e.target.result;
                previewImage.style.display = 'block';
            };
            reader.readAsDataURL(file);
            errorDiv.style.display = 'none';
            roastButton.disabled = false;
        }

        roastButton.addEventListener('click', generate);

        async function generate() {
            if (!selectedFile) {
                return;
            }
            setPending(true);

            const formData = new FormData();
            formData.append('image', selectedFile);
            formData.append('style', styleSelect.value);
            if (apiKeyInput.value.trim()) {
                formData.append('api_key', apiKeyInput.value.trim());
            }

            try {
                const response = await fetch('/roast', {
                    method: 'POST',
                    body: formData
                });
                const body = await response.json();
                if (!response.ok) {
                    showError(body.error || "Erreur inconnue.", body.kind);
                    return;
                }
                showResult(body);
            } catch (err) {
                showError("Impossible de générer le roast. Vérifie ta connexion et ta clé API.", 'inference');
            } finally {
                setPending(false);
            }
        }

        function setPending(pending) {
            roastButton.disabled = pending || !selectedFile;
            styleSelect.disabled = pending;
            loading.style.display = pending ? 'block' : 'none';
            if (pending) {
                result.style.display = 'none';
                errorDiv.style.display = 'none';
            }
        }

        function showResult(body) {
            const compliment = body.style === 'compliment';
            result.classList.toggle('compliment', compliment);
            resultLabel.textContent = compliment ? "💝 Compliment" : "🎭 Résultat du roast";
            roastText.textContent = body.roast;
            modelName.textContent = body.model;
            processingTime.textContent = body.processing_time_ms;
            result.style.display = 'block';
        }

        function showError(message, kind) {
            errorDiv.textContent = "Erreur : " + message;
            errorDiv.style.display = 'block';
            configPanel.classList.toggle('highlight', kind === 'config');
        }

        copyButton.addEventListener('click', async () => {
            try {
                await navigator.clipboard.writeText(roastText.textContent);
                copyButton.textContent = "✅ Copié !";
                setTimeout(() => { copyButton.textContent = "📋 Copier le texte"; }, 1500);
            } catch (err) {
                // clipboard unavailable (insecure context), leave the text visible
            }
        });

        resetButton.addEventListener('click', () => {
            selectedFile = null;
            fileInput.value = '';
            previewImage.style.display = 'none';
            result.style.display = 'none';
            errorDiv.style.display = 'none';
            configPanel.classList.remove('highlight');
            roastButton.disabled = true;
        });
    </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::INDEX_HTML;
    use crate::prompts::ALL_STYLES;

    #[test]
    fn page_offers_every_style() {
        for style in ALL_STYLES {
            let option = format!("value=\"{}\"", style.slug());
            assert!(INDEX_HTML.contains(&option), "no selector option for {style:?}");
        }
    }

    #[test]
    fn upload_is_restricted_to_png_and_jpeg() {
        assert!(INDEX_HTML.contains("accept=\"image/png,image/jpeg\""));
    }

    #[test]
    fn page_posts_to_the_roast_route() {
        assert!(INDEX_HTML.contains("fetch('/roast'"));
    }

    #[test]
    fn page_hints_at_the_credential_console() {
        assert!(INDEX_HTML.contains("console.mistral.ai"));
    }
}
